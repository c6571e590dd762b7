use super::{
    AxisKind, Dim, ImageMeta, MaskColor, Selection, SkyCs, axis_purpose, validate_mask_alpha,
};

#[test]
fn metadata_roundtrip_json() {
    let mut meta = ImageMeta::from_shape(&[64, 32, 10, 4]);
    meta.title = Some("cube".into());
    let serialized = serde_json::to_string_pretty(&meta).expect("serialize metadata");
    let restored: ImageMeta = serde_json::from_str(&serialized).expect("deserialize metadata");
    assert_eq!(restored, meta);
    assert_eq!(restored.frame_count(AxisKind::Spectral), 10);
    assert_eq!(restored.frame_count(AxisKind::Stokes), 4);
}

#[test]
fn missing_axis_has_a_single_frame() {
    let meta = ImageMeta::from_shape(&[8, 8]);
    assert_eq!(meta.frame_count(AxisKind::Spectral), 1);
    assert_eq!(meta.axis_index(AxisKind::DirectionLat), Some(1));
}

#[test]
fn metadata_rejects_bad_shapes() {
    assert!(ImageMeta::from_shape(&[8]).validate().is_err());
    assert!(ImageMeta::from_shape(&[8, 0]).validate().is_err());
    let duplicated = ImageMeta {
        dims: vec![
            Dim::new(AxisKind::DirectionLon, 4),
            Dim::new(AxisKind::DirectionLon, 4),
        ],
        ..ImageMeta::default()
    };
    assert!(duplicated.validate().is_err());
    assert!(ImageMeta::from_shape(&[8, 8, 3]).validate().is_ok());
}

#[test]
fn selection_clamps_when_bound_shrinks() {
    let mut selection = Selection::with_upper_bound(5);
    assert!(selection.set_index(4));
    assert!(selection.set_upper_bound(2));
    assert_eq!(selection.index(), 1);
    assert!(selection.set_upper_bound(0));
    assert_eq!(selection.index(), 0);
    assert!(!selection.set_upper_bound(3));
}

#[test]
fn selection_reports_only_real_changes() {
    let mut selection = Selection::with_upper_bound(3);
    assert!(!selection.set_index(0));
    assert!(selection.set_index(2));
    assert!(!selection.set_index(2));
    assert!(!selection.set_index(10));
    assert_eq!(selection.index(), 2);
}

#[test]
fn selection_state_roundtrip() {
    let mut selection = Selection::with_upper_bound(7);
    selection.set_index(3);
    let state = selection.state_string();
    let mut restored = Selection::new();
    restored.reset_state(&state).expect("restore selection");
    assert_eq!(restored, selection);
    assert!(restored.reset_state("not json").is_err());
}

#[test]
fn mask_color_collects_every_violation() {
    let errors = MaskColor::validate(300, 10, -1).expect_err("invalid channels");
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("red"));
    assert!(errors[1].contains("blue"));

    let errors = MaskColor::validate(300, 0, 0).expect_err("invalid red");
    assert_eq!(errors, vec!["Invalid red mask color [0,255]: 300".to_string()]);

    let color = MaskColor::validate(1, 2, 3).expect("valid color");
    assert_eq!((color.red, color.green, color.blue), (1, 2, 3));
    assert!(validate_mask_alpha(256).is_err());
    assert_eq!(validate_mask_alpha(128), Ok(128));
}

#[test]
fn axis_purpose_depends_on_coordinate_system() {
    assert_eq!(axis_purpose(AxisKind::DirectionLon, SkyCs::J2000), "Right Ascension");
    assert_eq!(
        axis_purpose(AxisKind::DirectionLon, SkyCs::Galactic),
        "Galactic Longitude"
    );
    assert_eq!(axis_purpose(AxisKind::Spectral, SkyCs::Ecliptic), "Channel");
    for cs in [SkyCs::J2000, SkyCs::Galactic, SkyCs::Ecliptic] {
        let mut names = AxisKind::KNOWN
            .iter()
            .map(|axis| axis_purpose(*axis, cs))
            .collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AxisKind::KNOWN_COUNT);
    }
}

#[test]
fn axis_slots_follow_known_order() {
    assert_eq!(AxisKind::Other.slot(), None);
    for (slot, axis) in AxisKind::KNOWN.iter().enumerate() {
        assert_eq!(axis.slot(), Some(slot));
        assert_eq!(AxisKind::from_slot(slot), Some(*axis));
    }
    assert_eq!("Channel".parse::<AxisKind>().ok(), Some(AxisKind::Spectral));
    assert!("bogus".parse::<AxisKind>().is_err());
}
