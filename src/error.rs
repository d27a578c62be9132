use thiserror::Error;

/// Why a span was not drawn. The buffer is left blank in every case except
/// [`SpanError::NoBuffer`], where there is nothing to blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpanError {
    #[error("no screen buffer")]
    NoBuffer,
    #[error("screen buffer holds {len} bytes, geometry needs {required}")]
    BufferTooSmall { len: usize, required: usize },
    #[error("span start {x1} is past its end {x2}")]
    InvertedRange { x1: usize, x2: usize },
    #[error("span end {x2} is outside a {bit_width} pixel row")]
    EndOutOfBounds { x2: usize, bit_width: usize },
    #[error("row {row} is outside a {depth} row screen")]
    RowOutOfBounds { row: usize, depth: usize },
}

/// Scan-out failure, carrying the HAL's own error.
#[derive(Debug, Error)]
pub enum PanelError<S, P> {
    #[error("spi transfer failed: {0:?}")]
    Spi(S),
    #[error("sync pin failed: {0:?}")]
    Pin(P),
}
