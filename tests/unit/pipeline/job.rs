use super::*;

#[test]
fn defaults_match_the_generator_surface() {
    let job = GenerationJob::default();
    assert_eq!(job.resolution, Resolution::X2);
    assert_eq!(job.target, ImageTarget::Background);
    assert_eq!(job.pacing.settle_fallback, Duration::from_millis(400));
    assert_eq!(job.pacing.inter_step, Duration::from_millis(100));
}

#[test]
fn start_is_not_reentrant() {
    let job = GenerationJob::default();
    let guard = job.start().unwrap();

    assert!(job.status().is_running());
    assert!(matches!(job.start(), Err(GlassError::Busy(_))));
    drop(guard);
    assert!(!job.status().is_running());
}

#[test]
fn starting_resets_progress() {
    let job = GenerationJob::default();
    {
        let _guard = job.start().unwrap();
        job.set_progress(5);
        assert_eq!(job.status().progress(), 5);
    }
    let _guard = job.start().unwrap();
    assert_eq!(job.status().progress(), 0);
}

#[test]
fn status_is_shared_across_clones() {
    let job = GenerationJob::default();
    let status = job.status();
    let _guard = job.start().unwrap();
    job.set_progress(3);

    assert!(status.is_running());
    assert_eq!(status.progress(), 3);
}

#[test]
fn image_target_wire_names() {
    assert_eq!(
        serde_json::to_value(ImageTarget::Background).unwrap(),
        serde_json::json!("background")
    );
    assert_eq!(
        serde_json::to_value(ImageTarget::Subject).unwrap(),
        serde_json::json!("card")
    );
}
