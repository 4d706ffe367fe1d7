use num_traits::PrimInt;

// Bit helpers
//------------------------------------------------------------------------------

/// Returns whether bit `pos` of `value` is set, counting from the least
/// significant bit.
#[inline]
pub fn bit_at<T: PrimInt>(value: T, pos: usize) -> bool {
    (value >> pos) & T::one() == T::one()
}
