//! The read-insert-print loop.

use std::io::{self, BufRead, Write};

use rbtree_set::RBTreeSet;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, ReplConfig};

/// Driver errors.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ReplError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Reads one integer per line from `input`, inserting each into a fresh set and printing the
/// tree to `output` after every insertion.
///
/// Stops at end of input or when the configured sentinel is read. Blank lines are skipped and
/// anything that is not an integer is reported and skipped without touching the tree.
pub(crate) fn run<R, W>(
    config: &ReplConfig,
    mut input: R,
    output: &mut W,
) -> Result<RBTreeSet<i64>, ReplError>
where
    R: BufRead,
    W: Write,
{
    let mut set = RBTreeSet::new();
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            break;
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let value: i64 = match text.parse() {
            Ok(value) => value,
            Err(e) => {
                warn!(input = text, error = %e, "Ignoring input that is not an integer");
                writeln!(output, "not an integer: {text:?}")?;
                continue;
            }
        };

        if value == config.sentinel {
            debug!(value, "sentinel read");
            break;
        }

        if set.insert(value) {
            debug!(value, len = set.len(), height = set.height(), "inserted");
        } else {
            writeln!(output, "{value} is already present")?;
        }

        let diagram = set.diagram().indent(config.indent).direction(config.order);
        write!(output, "{diagram}")?;
    }

    info!(len = set.len(), height = set.height(), "input finished");
    Ok(set)
}
