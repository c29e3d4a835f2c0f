use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::tree::TreeStats;

const UNITS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Byte count in binary units with one decimal: 1023 B, 1.0 KiB, 1.5 MiB, ...
pub fn human_readable_byte_count(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    // 1023.95 would print as 1024.0, so move up a unit before that
    while value >= 1023.95 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}iB", value, UNITS[unit])
}

/// Smaller size over larger size, so the rate is never above 1 whichever way the data went.
pub fn compression_rate(input_size: u64, output_size: u64) -> f64 {
    let (small, large) = if input_size < output_size {
        (input_size, output_size)
    } else {
        (output_size, input_size)
    };
    if large == 0 {
        return 1.0;
    }
    small as f64 / large as f64
}

/// What the statistics switch prints after a run.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub input_size: u64,
    pub output_size: u64,
    pub elapsed: Duration,
    pub stats: TreeStats,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "Input file size:  {}",
            human_readable_byte_count(self.input_size)
        )?;
        writeln!(
            f,
            "Output file size: {}",
            human_readable_byte_count(self.output_size)
        )?;
        writeln!(
            f,
            "Compression rate: {:.2}%",
            compression_rate(self.input_size, self.output_size) * 100.0
        )?;
        writeln!(f, "Processing time:  {:.3}s", self.elapsed.as_secs_f64())?;
        writeln!(f)?;
        write!(f, "{}", self.stats)
    }
}
