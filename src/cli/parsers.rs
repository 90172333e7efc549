use std::str::FromStr;

/// Worker pool size given to `--jobs`: a positive count or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobsArg {
    Auto,
    Fixed(usize),
}

impl JobsArg {
    /// Resolve `auto` against the machine's logical CPU count.
    pub fn resolve(self) -> usize {
        match self {
            Self::Auto => num_cpus::get(),
            Self::Fixed(n) => n,
        }
    }
}

impl FromStr for JobsArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        match s.parse::<usize>() {
            Ok(0) => Err("value must be at least 1".to_string()),
            Ok(n) => Ok(Self::Fixed(n)),
            Err(err) => Err(format!("invalid number '{s}': {err}")),
        }
    }
}
