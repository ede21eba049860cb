/// Default bound on recursive rule nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Settings for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// How deep statements, expressions, logic chains and comparison chains
    /// may nest before the parser gives up on the construct.
    pub max_depth: usize,
    /// Print each diagnostic to stdout as soon as it is reported.
    pub echo_diagnostics: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            echo_diagnostics: true,
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Collect diagnostics without printing them.
    pub fn quiet(mut self) -> Self {
        self.echo_diagnostics = false;
        self
    }
}
