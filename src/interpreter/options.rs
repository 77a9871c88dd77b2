use crate::number::base::BaseSystem;

/// Caller-controlled parse settings.
///
/// # Example
/// ```
/// use exacta::{ParseOptions, number::base::BaseSystem, parse};
///
/// let options = ParseOptions::default().with_input_base(BaseSystem::hexadecimal());
/// assert_eq!(parse("FF + 1", &options).unwrap().to_string(), "256");
///
/// let legacy = ParseOptions::default().with_type_aware(false);
/// assert_eq!(parse("2", &legacy).unwrap().to_string(), "2:2");
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Narrow results to the simplest shape that matches the notation. When
    /// `false`, every result is a `RationalInterval`.
    pub type_aware: bool,
    /// Radix for numerals without an explicit `[base]`.
    pub input_base: BaseSystem,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { type_aware: true,
               input_base: BaseSystem::decimal(), }
    }
}

impl ParseOptions {
    /// Returns the options with type-aware promotion switched on or off.
    #[must_use]
    pub const fn with_type_aware(mut self, type_aware: bool) -> Self {
        self.type_aware = type_aware;
        self
    }

    /// Returns the options with a different input base.
    #[must_use]
    pub fn with_input_base(mut self, input_base: BaseSystem) -> Self {
        self.input_base = input_base;
        self
    }
}
