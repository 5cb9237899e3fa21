use anyhow::Result;
use glyphpass_reveal::{
    plan, resolve_stagger, schedule, RevealStep, Stagger, StaggerProfile,
    LEGACY_FALLBACK, STANDARD_FALLBACK,
};
use parking_lot::Mutex;
use std::{sync::Arc, time::Duration};

#[test]
fn plan_delays_increase_by_stagger() {
    for seconds in [0.01, 0.15, 0.3, 1.0, 2.5] {
        let stagger = Stagger::new(seconds).unwrap();
        let text = "Reveal me";
        let steps: Vec<RevealStep> = plan(text, stagger).iter().collect();
        assert_eq!(text.chars().count(), steps.len());
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(index, step.index);
            assert_eq!(index as f64 * seconds, step.delay_seconds);
        }
        for pair in steps.windows(2) {
            assert!(pair[1].delay_seconds > pair[0].delay_seconds);
        }
    }
}

#[test]
fn plan_keeps_characters_in_order() {
    let text = "日本 text";
    let reveal_plan = plan(text, Stagger::new(0.1).unwrap());
    let revealed: String = reveal_plan.iter().map(|s| s.character).collect();
    assert_eq!(text, revealed);
    assert_eq!(7, reveal_plan.len());
}

#[test]
fn plan_empty_text() {
    let reveal_plan = plan("", Stagger::new(0.2).unwrap());
    assert!(reveal_plan.is_empty());
    assert_eq!(0, reveal_plan.iter().count());
    assert_eq!(Duration::ZERO, reveal_plan.total_delay());
}

#[test]
fn plan_total_delay() {
    let reveal_plan = plan("abcde", Stagger::new(0.25).unwrap());
    assert_eq!(Duration::from_secs(1), reveal_plan.total_delay());
}

#[test]
fn stagger_standard_profile() {
    let profile = StaggerProfile::Standard;
    assert_eq!(0.2, resolve_stagger(Some("200ms"), profile).seconds());
    assert_eq!(0.4, resolve_stagger(Some(" 0.4s "), profile).seconds());
    assert_eq!(0.5, resolve_stagger(Some("0.5"), profile).seconds());
    for value in [
        None,
        Some(""),
        Some("  "),
        Some("fast"),
        Some("0s"),
        Some("-1s"),
    ] {
        assert_eq!(
            STANDARD_FALLBACK,
            resolve_stagger(value, profile).seconds()
        );
    }
}

#[test]
fn stagger_legacy_profile() {
    let profile = StaggerProfile::Legacy;
    assert_eq!(0.2, resolve_stagger(Some("200ms"), profile).seconds());
    assert_eq!(0.4, resolve_stagger(Some("0.4s"), profile).seconds());
    for value in [
        None,
        Some(""),
        Some("0.5"),
        Some("fast"),
        Some("0ms"),
        Some("-3s"),
    ] {
        assert_eq!(
            LEGACY_FALLBACK,
            resolve_stagger(value, profile).seconds()
        );
    }
}

#[test]
fn stagger_profile_names() -> Result<()> {
    assert_eq!(StaggerProfile::Standard, "standard".parse()?);
    assert_eq!(StaggerProfile::Legacy, "legacy".parse()?);
    assert!("eager".parse::<StaggerProfile>().is_err());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn schedule_reveals_every_character() -> Result<()> {
    let revealed = Arc::new(Mutex::new(String::new()));
    let target = Arc::clone(&revealed);
    let reveal_plan = plan("hello", StaggerProfile::Standard.fallback());

    let scheduled = schedule(
        &reveal_plan,
        Arc::new(move |step: &RevealStep| target.lock().push(step.character)),
    );
    scheduled.join().await?;

    assert_eq!("hello", revealed.lock().as_str());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn schedule_is_fire_and_forget() -> Result<()> {
    let count = Arc::new(Mutex::new(0usize));
    let target = Arc::clone(&count);
    let reveal_plan = plan("abc", Stagger::new(1.0).unwrap());

    drop(schedule(
        &reveal_plan,
        Arc::new(move |_: &RevealStep| *target.lock() += 1),
    ));
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert_eq!(3, *count.lock());
    Ok(())
}
