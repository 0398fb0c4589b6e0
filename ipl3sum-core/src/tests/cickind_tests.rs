use super::*;

#[test]
fn all_has_six_variants() {
    assert_eq!(CicKind::all().len(), 6);
}

#[test]
fn seeds_match_hardware() {
    assert_eq!(CicKind::Cic6101.seed(), 0x3F);
    assert_eq!(CicKind::Cic6102.seed(), 0x3F);
    assert_eq!(CicKind::Cic7102.seed(), 0x3F);
    assert_eq!(CicKind::CicX103.seed(), 0x78);
    assert_eq!(CicKind::CicX105.seed(), 0x91);
    assert_eq!(CicKind::CicX106.seed(), 0x85);
}

#[test]
fn magics_match_hardware() {
    assert_eq!(CicKind::Cic6102.magic(), 0x5D588B65);
    assert_eq!(CicKind::CicX105.magic(), 0x5D588B65);
    assert_eq!(CicKind::CicX103.magic(), 0x6C078965);
    assert_eq!(CicKind::CicX106.magic(), 0x6C078965);
}

#[test]
fn canonical_names_round_trip() {
    for &kind in CicKind::all() {
        assert_eq!(CicKind::from_name(kind.name()), Ok(kind), "{}", kind);
    }
}

#[test]
fn aliases_resolve() {
    assert_eq!(CicKind::from_name("6102"), Ok(CicKind::Cic6102));
    assert_eq!(CicKind::from_name("7101"), Ok(CicKind::Cic6102));
    assert_eq!(CicKind::from_name("6103"), Ok(CicKind::CicX103));
    assert_eq!(CicKind::from_name("7103"), Ok(CicKind::CicX103));
    assert_eq!(CicKind::from_name("6105"), Ok(CicKind::CicX105));
    assert_eq!(CicKind::from_name("7106"), Ok(CicKind::CicX106));
}

#[test]
fn name_lookup_is_case_sensitive() {
    assert_eq!(
        CicKind::from_name("x103"),
        Err(ChecksumError::UnableToDetectCic)
    );
}

#[test]
fn unknown_name_fails() {
    assert_eq!(
        CicKind::from_name("6104"),
        Err(ChecksumError::UnableToDetectCic)
    );
}

#[test]
fn index_round_trips() {
    for &kind in CicKind::all() {
        assert_eq!(CicKind::from_index(kind.index()), Ok(kind));
    }
}

#[test]
fn from_index_rejects_out_of_range() {
    assert_eq!(
        CicKind::from_index(6),
        Err(ChecksumError::OutOfBounds {
            offset: 6,
            requested_bytes: 1,
            buffer_len: 6,
        })
    );
    assert!(CicKind::from_index(usize::MAX).is_err());
}

#[test]
fn digest_lookup_round_trips() {
    for &kind in CicKind::all() {
        let digest = kind.ipl3_md5().expect("every current variant has a digest");
        assert_eq!(CicKind::from_md5(digest), Ok(kind));
    }
}

#[test]
fn unknown_digest_fails() {
    assert_eq!(
        CicKind::from_md5(&[0; 16]),
        Err(ChecksumError::UnableToDetectCic)
    );
}

#[test]
fn display_and_parse_agree() {
    let kind: CicKind = "6102-7101".parse().unwrap();
    assert_eq!(kind, CicKind::Cic6102);
    assert_eq!(kind.to_string(), "6102-7101");
}
