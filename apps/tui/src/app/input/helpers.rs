/// Step an index by a signed delta, saturating at both ends of the list.
pub fn step_saturating(index: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    {
        (index as i64 + delta).clamp(0, len as i64 - 1) as usize
    }
}
