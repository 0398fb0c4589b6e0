use super::*;

#[test]
fn reads_big_endian_words() {
    let bytes = [0x80, 0x37, 0x12, 0x40, 0x00, 0x00, 0x14, 0x4B];
    let view = WordView::new(&bytes);
    assert_eq!(view.word_at(0), Ok(0x80371240));
    assert_eq!(view.word_at(4), Ok(0x0000144B));
}

#[test]
fn rejects_unaligned_offset() {
    let bytes = [0u8; 8];
    let view = WordView::new(&bytes);
    assert_eq!(
        view.word_at(2),
        Err(ChecksumError::UnalignedRead { offset: 2 })
    );
}

#[test]
fn rejects_read_past_end() {
    let bytes = [0u8; 6];
    let view = WordView::new(&bytes);
    assert_eq!(
        view.word_at(4),
        Err(ChecksumError::OutOfBounds {
            offset: 4,
            requested_bytes: 4,
            buffer_len: 6,
        })
    );
}

#[test]
fn rejects_offset_overflow() {
    let bytes = [0u8; 8];
    let view = WordView::new(&bytes);
    assert!(view.word_at(usize::MAX - 3).is_err());
}

#[test]
fn reads_consecutive_run() {
    let bytes = [0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3];
    let view = WordView::new(&bytes);
    assert_eq!(view.words(0, 3), Ok(vec![1, 2, 3]));
    assert_eq!(view.words(4, 2), Ok(vec![2, 3]));
}

#[test]
fn run_propagates_first_error() {
    let bytes = [0u8; 8];
    let view = WordView::new(&bytes);
    assert_eq!(
        view.words(0, 3),
        Err(ChecksumError::OutOfBounds {
            offset: 8,
            requested_bytes: 4,
            buffer_len: 8,
        })
    );
}
