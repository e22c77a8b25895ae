//! Per-channel streaming state.

/// Cursor and carry state for one channel.
///
/// The history samples themselves live in one arena owned by the engine,
/// `mem_alloc_size` samples per channel; this struct only tracks positions
/// into that region. Channels never share state.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ChannelState {
    /// Integer read position of the convolution window in the history buffer.
    pub cursor: usize,
    /// Fractional sub-sample position, a numerator over the reduced ratio's
    /// denominator. Always `< den_rate`.
    pub frac: u32,
    /// History samples preserved across a filter-length change. They are
    /// consumed as virtual, zero-cost input before any new caller data.
    pub magic: usize,
}
