use deska_core::action::Effect;
use deska_infrastructure::executor_for;

#[test]
fn test_disabled_launch_skips_effects() {
    let executor = executor_for(false);
    let effect = Effect::OpenUrl("https://www.github.com".to_string());

    // Nothing is spawned, so this succeeds on any machine
    assert!(executor.execute(&effect).is_ok());
    assert!(executor.execute(&effect).is_ok());
}
