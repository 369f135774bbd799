//! End-to-end test through the facade crate with logging enabled

use gait_steps::{
    Activity, Condition, ConditionMapping, GaitStepsExt, LegSide, Regime, SegmentationParameters,
    StepColumns, StepSegmenter,
};
use polars::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn label(activity: Activity) -> String {
    Condition::new(Regime::Sm, activity).label()
}

#[test]
fn test_recording_through_dataframe() -> anyhow::Result<()> {
    init_tracing();

    let undefined = label(Activity::Undefined);
    let walking = label(Activity::Walking);
    let mut conditions = vec![undefined.as_str(); 3];
    conditions.extend(vec![walking.as_str(); 9]);

    let df = df![
        "ankle_position_left" => [0i64, 0, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1],
        "ankle_position_right" => [2i64, 3, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0],
        "condition" => conditions,
    ]?;

    let columns = StepColumns::default();
    let params = SegmentationParameters::default();
    let result = df.process_steps(&columns, &params)?;
    tracing::info!(rows = result.height(), "processed recording");

    let steps: Vec<i64> = result
        .column("step_number_l")?
        .i64()?
        .into_no_null_iter()
        .collect();
    assert_eq!(steps, vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 2, 3, 3]);

    let complete: Vec<bool> = result
        .column("step_complete_l")?
        .bool()?
        .into_no_null_iter()
        .collect();
    // Step 1 visits exactly {1, 2, 3} right after the warm-up
    assert_eq!(
        complete,
        vec![false, false, false, true, true, true, true, true, true, true, false, false]
    );

    let coded = result.with_condition_codes("condition", ConditionMapping::standard(), "code")?;
    let codes: Vec<i32> = coded.column("code")?.i32()?.into_no_null_iter().collect();
    assert_eq!(&codes[..4], &[0, 0, 0, 1]);
    Ok(())
}

#[test]
fn test_slices_match_dataframe() -> anyhow::Result<()> {
    init_tracing();

    let left = [0i64, 1, 2, 3, 0, 1, 2, 3, 0];
    let right = [3i64, 0, 1, 2, 3, 0, 1, 2, 3];
    let conditions = ["transparent_RAMPS_UP"; 9];

    let segmentation = StepSegmenter::default().segment(&left, &right, &conditions)?;
    let df = df![
        "ankle_position_left" => left,
        "ankle_position_right" => right,
        "condition" => conditions,
    ]?;
    let frame = df.process_steps(&StepColumns::default(), &SegmentationParameters::default())?;

    let right_steps: Vec<i64> = frame
        .column("step_number_r")?
        .i64()?
        .into_no_null_iter()
        .collect();
    assert_eq!(right_steps, segmentation.leg(LegSide::Right).steps());
    assert_eq!(segmentation.left.step_count(), 3);
    Ok(())
}
