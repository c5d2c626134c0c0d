use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Affine map from a data interval onto `[0, span_px]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlotError::InvalidArgument(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_end - self.domain_start
    }

    pub fn domain_to_pixel(self, value: f64, span_px: f64) -> PlotResult<f64> {
        validate_span(span_px)?;
        if !value.is_finite() {
            return Err(PlotError::InvalidArgument("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / self.span();
        Ok(normalized * span_px)
    }

    /// Maps onto a pixel axis that grows downward, as screen Y does.
    pub fn domain_to_pixel_inverted(self, value: f64, span_px: f64) -> PlotResult<f64> {
        Ok(span_px - self.domain_to_pixel(value, span_px)?)
    }

    pub fn pixel_to_domain(self, pixel: f64, span_px: f64) -> PlotResult<f64> {
        validate_span(span_px)?;
        if !pixel.is_finite() {
            return Err(PlotError::InvalidArgument("pixel must be finite".to_owned()));
        }

        let normalized = pixel / span_px;
        Ok(self.domain_start + normalized * self.span())
    }

    /// Data units covered by `length_px` pixels.
    pub fn pixels_to_domain_length(self, length_px: f64, span_px: f64) -> PlotResult<f64> {
        validate_span(span_px)?;
        Ok(length_px / span_px * self.span().abs())
    }
}

fn validate_span(span_px: f64) -> PlotResult<()> {
    if !span_px.is_finite() || span_px <= 0.0 {
        return Err(PlotError::InvalidArgument(
            "pixel span must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
