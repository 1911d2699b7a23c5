//! Scripted key input for headless runs.
//!
//! A script is a whitespace-separated list of steps. Each step names the
//! keys held for one tick (`w`, `a`, `s`, `d`, combinable, or `.` for none)
//! and may repeat with `*N`:
//!
//! ```text
//! w*20 wd*5 . d*3
//! ```
use std::str::FromStr;

use anyhow::{Context, Result};
use hero_core::{Direction, KeySnapshot};

pub fn parse(script: &str) -> Result<Vec<KeySnapshot>> {
    let mut ticks = Vec::new();

    for step in script.split_whitespace() {
        let (keys, count) = match step.split_once('*') {
            Some((keys, count)) => {
                let count: usize = count
                    .parse()
                    .with_context(|| format!("invalid repeat count in step '{}'", step))?;
                (keys, count)
            }
            None => (step, 1),
        };

        let snapshot = parse_keys(keys).with_context(|| format!("invalid step '{}'", step))?;
        ticks.extend(std::iter::repeat_n(snapshot, count));
    }

    Ok(ticks)
}

fn parse_keys(keys: &str) -> Result<KeySnapshot> {
    if keys == "." {
        return Ok(KeySnapshot::empty());
    }
    if keys.is_empty() {
        anyhow::bail!("no keys given");
    }

    let mut snapshot = KeySnapshot::empty();
    for key in keys.chars() {
        let direction = Direction::from_str(key.encode_utf8(&mut [0; 4]))
            .map_err(|_| anyhow::anyhow!("unknown key '{}'", key))?;
        snapshot |= direction.key();
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_repeats() {
        let ticks = parse("w*3 . d").unwrap();
        assert_eq!(
            ticks,
            vec![
                KeySnapshot::UP,
                KeySnapshot::UP,
                KeySnapshot::UP,
                KeySnapshot::empty(),
                KeySnapshot::RIGHT,
            ]
        );
    }

    #[test]
    fn combines_keys_within_a_step() {
        assert_eq!(
            parse("WA").unwrap(),
            vec![KeySnapshot::UP | KeySnapshot::LEFT]
        );
    }

    #[test]
    fn empty_script_has_no_ticks() {
        assert!(parse("  \n ").unwrap().is_empty());
        assert!(parse("s*0").unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_keys_and_counts() {
        assert!(parse("q").is_err());
        assert!(parse("w*x").is_err());
        assert!(parse("*3").is_err());
    }
}
