use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AlluvialError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AlluvialError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        AlluvialError::InvalidGroupCount(1)
            .to_string()
            .contains("got 1")
    );
    assert_eq!(
        AlluvialError::MissingColumn("x".to_string()).to_string(),
        "missing column \"x\""
    );
}

#[test]
fn empty_group_names_group_and_stratum() {
    let err = AlluvialError::empty_group("t0");
    assert_eq!(err.to_string(), "empty group: group \"t0\" has no rows");

    let err = AlluvialError::empty_stratum("t1", "B");
    assert_eq!(
        err.to_string(),
        "empty group: stratum \"B\" in group \"t1\" has no rows"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AlluvialError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
