use crate::error::{InputError, InputResult};
use fencecalc_types::job::EstimationInput;
use fencecalc_types::pricing::PriceList;

/// Tallest fence a job may ask for.
pub const MAX_FENCE_HEIGHT: u32 = 100;

/// Most fence, summed over all runs, that one job may hold.
pub const MAX_TOTAL_LENGTH: f64 = 1_000_000.0;

/// Upper bound on each terminal-point and gate count.
pub const MAX_COUNT: u32 = 10_000;

/// Fence height in whole length units. Between 1 and [`MAX_FENCE_HEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FenceHeight(u32);

impl FenceHeight {
    pub fn new(value: u32) -> Option<Self> {
        (1..=MAX_FENCE_HEIGHT).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Parses the job form's height string.
    pub fn parse(raw: &str) -> InputResult<Self> {
        let value = parse_height(raw).ok_or_else(|| InputError::InvalidHeight {
            raw: raw.to_string(),
        })?;
        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(InputError::HeightOutOfRange {
                value,
                max: MAX_FENCE_HEIGHT,
            })
    }
}

/// Reads the leading integer of `raw`, the way the job form has always read it.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the first
/// non-digit, so `"4.5"` is 4 and `"6ft"` is 6. Returns `None` when no digit
/// follows, or when the digits do not fit in an `i64`.
pub fn parse_height(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// A job whose numbers are known to be usable.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedJob {
    input: EstimationInput,
    height: FenceHeight,
    total_length: f64,
}

impl ValidatedJob {
    pub fn input(&self) -> &EstimationInput {
        &self.input
    }

    pub fn height(&self) -> FenceHeight {
        self.height
    }

    /// Sum of run lengths. Finite, non-negative and at most [`MAX_TOTAL_LENGTH`].
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn into_input(self) -> EstimationInput {
        self.input
    }
}

impl TryFrom<EstimationInput> for ValidatedJob {
    type Error = InputError;

    fn try_from(input: EstimationInput) -> Result<Self, Self::Error> {
        for (index, run) in input.runs.iter().enumerate() {
            if !run.length.is_finite() || run.length < 0.0 {
                return Err(InputError::InvalidRunLength {
                    index,
                    length: run.length,
                });
            }
        }
        let total_length = input.total_length();
        if !total_length.is_finite() || total_length > MAX_TOTAL_LENGTH {
            return Err(InputError::TotalLengthOutOfRange {
                total: total_length,
                max: MAX_TOTAL_LENGTH,
            });
        }
        let height = FenceHeight::parse(&input.fence_height)?;
        check_counts(&input)?;
        Ok(Self {
            input,
            height,
            total_length,
        })
    }
}

fn check_counts(input: &EstimationInput) -> InputResult<()> {
    let counts = [
        ("ends", input.ends),
        ("corners", input.corners),
        ("singleGates", input.single_gates),
        ("doubleGates", input.double_gates),
        ("pedestrianGates", input.pedestrian_gates),
    ];
    match counts.into_iter().find(|&(_, value)| value > MAX_COUNT) {
        Some((field, value)) => Err(InputError::CountOutOfRange {
            field,
            value,
            max: MAX_COUNT,
        }),
        None => Ok(()),
    }
}

/// Rejects negative or non-finite unit prices.
pub fn validate_prices(prices: &PriceList) -> InputResult<()> {
    match prices
        .iter()
        .find(|(_, price)| !price.is_finite() || *price < 0.0)
    {
        Some((kind, price)) => Err(InputError::InvalidPrice { kind, price }),
        None => Ok(()),
    }
}
