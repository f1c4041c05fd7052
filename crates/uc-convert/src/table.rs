//! Scale-factor tables for the linear conversion domains.

use uc_core::{CoreError, CoreResult, Real, ensure_scale_factor};

use crate::{ConvertError, ConvertResult, Domain};

/// Immutable mapping from unit code to "how many canonical units one of this unit is".
///
/// Conversion goes through the canonical unit:
/// `canonical = value * factor[from]`, `result = canonical / factor[to]`,
/// so any pair of codes in the table converts without a per-pair entry.
#[derive(Debug)]
pub struct UnitTable {
    domain: Domain,
    canonical: &'static str,
    entries: &'static [(&'static str, Real)],
}

impl UnitTable {
    pub const fn new(
        domain: Domain,
        canonical: &'static str,
        entries: &'static [(&'static str, Real)],
    ) -> Self {
        Self {
            domain,
            canonical,
            entries,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Code of the unit with factor 1.
    pub fn canonical(&self) -> &'static str {
        self.canonical
    }

    pub fn entries(&self) -> &'static [(&'static str, Real)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(code, _)| code)
    }

    /// Case-insensitive factor lookup.
    pub fn factor(&self, code: &str) -> Option<Real> {
        self.entries
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|&(_, factor)| factor)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.factor(code).is_some()
    }

    /// Express `value` (in `code`) in the canonical unit.
    pub fn to_canonical(&self, value: Real, code: &str) -> ConvertResult<Real> {
        let factor = self.factor(code).ok_or_else(|| ConvertError::UnknownUnit {
            domain: self.domain,
            from: code.to_string(),
            to: self.canonical.to_string(),
            unknown: vec![code.to_string()],
        })?;
        Ok(value * factor)
    }

    /// Convert `value` from one unit of this table to another.
    ///
    /// Fails with [`ConvertError::UnknownUnit`] naming every unrecognized code.
    pub fn convert(&self, value: Real, from: &str, to: &str) -> ConvertResult<Real> {
        let (from_factor, to_factor) = self.lookup_pair(from, to)?;
        let canonical = value * from_factor;
        Ok(canonical / to_factor)
    }

    fn lookup_pair(&self, from: &str, to: &str) -> ConvertResult<(Real, Real)> {
        match (self.factor(from), self.factor(to)) {
            (Some(from_factor), Some(to_factor)) => Ok((from_factor, to_factor)),
            (from_factor, to_factor) => {
                let mut unknown = Vec::with_capacity(2);
                if from_factor.is_none() {
                    unknown.push(from.to_string());
                }
                let repeated = from_factor.is_none() && from.eq_ignore_ascii_case(to);
                if to_factor.is_none() && !repeated {
                    unknown.push(to.to_string());
                }
                Err(ConvertError::UnknownUnit {
                    domain: self.domain,
                    from: from.to_string(),
                    to: to.to_string(),
                    unknown,
                })
            }
        }
    }

    /// Check that every factor is finite and strictly positive and that the
    /// canonical code is present with factor 1.
    pub fn validate(&self) -> CoreResult<()> {
        for &(code, factor) in self.entries {
            ensure_scale_factor(factor, code)?;
        }
        match self.factor(self.canonical) {
            Some(factor) if factor == 1.0 => Ok(()),
            _ => Err(CoreError::InvalidArg {
                what: "canonical unit must have factor 1",
            }),
        }
    }
}
