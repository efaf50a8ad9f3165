//! Permissive pre-pass over the raw command line.
//!
//! Unrecognized flags and stray words are dropped before clap sees them, so
//! `sensedecode --bogus -h 1` still decodes host status 1. Only option names
//! known to the clap schema survive. A value-taking option keeps the next
//! token as its value unless that token looks like a flag; negative numbers
//! count as values. An option left without a value is dropped too, so
//! `-d -x -h 1` decodes host status 1 only.

use std::collections::HashMap;
use std::ffi::OsString;

/// Result of filtering: what clap should parse, and what was thrown away.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FilteredArgs {
    pub args: Vec<OsString>,
    pub dropped: Vec<String>,
}

/// Option names the schema accepts, mapped to whether they take a value.
struct Schema {
    longs: HashMap<String, bool>,
    shorts: HashMap<char, bool>,
}

impl Schema {
    fn from_command(cmd: &clap::Command) -> Self {
        let mut longs = HashMap::new();
        let mut shorts = HashMap::new();
        for arg in cmd.get_arguments() {
            let takes_value = arg.get_action().takes_values();
            if let Some(long) = arg.get_long() {
                longs.insert(long.to_owned(), takes_value);
            }
            if let Some(short) = arg.get_short() {
                shorts.insert(short, takes_value);
            }
        }
        Self { longs, shorts }
    }
}

/// Keep only tokens that the clap schema of `cmd` recognizes.
///
/// The first token is the program name and is always kept.
pub fn retain_known<I, T>(cmd: &clap::Command, raw: I) -> FilteredArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let schema = Schema::from_command(cmd);
    let mut out = FilteredArgs::default();
    let mut tokens = raw.into_iter().map(Into::into).peekable();

    if let Some(bin) = tokens.next() {
        out.args.push(bin);
    }

    while let Some(token) = tokens.next() {
        let text = token.to_string_lossy().into_owned();

        if text == "--" {
            // Nothing after `--` can be an option, and no positionals exist.
            out.dropped.push(text);
            out.dropped
                .extend(tokens.by_ref().map(|t| t.to_string_lossy().into_owned()));
            break;
        }

        if let Some(long) = text.strip_prefix("--") {
            let (name, inline_value) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };
            match schema.longs.get(name) {
                Some(&takes_value) if takes_value && !inline_value => {
                    match tokens.next_if(is_value) {
                        Some(value) => out.args.extend([token, value]),
                        None => out.dropped.push(text),
                    }
                }
                Some(_) => out.args.push(token),
                None => out.dropped.push(text),
            }
            continue;
        }

        if let Some(cluster) = text.strip_prefix('-').filter(|c| !c.is_empty()) {
            let (mut kept, wants_next) = filter_short_cluster(&schema, cluster);
            let value = if wants_next {
                let value = tokens.next_if(is_value);
                if value.is_none() {
                    kept.pop();
                }
                value
            } else {
                None
            };
            if kept.len() != text.len() {
                out.dropped.push(text);
            }
            if kept.len() > 1 {
                out.args.push(OsString::from(kept));
                out.args.extend(value);
            }
            continue;
        }

        out.dropped.push(text);
    }

    out
}

/// Rebuild a `-abc` cluster from known short flags only.
///
/// Returns the rebuilt token (just `-` if nothing survived) and whether the
/// last kept flag takes its value from the next token.
fn filter_short_cluster(schema: &Schema, cluster: &str) -> (String, bool) {
    let mut kept = String::from("-");
    for (idx, c) in cluster.char_indices() {
        match schema.shorts.get(&c) {
            Some(&true) => {
                kept.push(c);
                let rest = &cluster[idx + c.len_utf8()..];
                kept.push_str(rest);
                return (kept, rest.is_empty());
            }
            Some(&false) => kept.push(c),
            None => {}
        }
    }
    (kept, false)
}

/// Whether `token` can serve as an option value: anything not shaped like a
/// flag, plus negative integers.
fn is_value(token: &OsString) -> bool {
    let text = token.to_string_lossy();
    match text.strip_prefix('-') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use crate::cli::Cli;

    fn filter(args: &[&str]) -> FilteredArgs {
        let mut raw = vec!["sensedecode"];
        raw.extend_from_slice(args);
        retain_known(&Cli::command(), raw)
    }

    fn kept(args: &[&str]) -> Vec<String> {
        filter(args)
            .args
            .into_iter()
            .skip(1)
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn known_options_pass_through() {
        assert_eq!(kept(&["-h", "1", "--device", "2"]), ["-h", "1", "--device", "2"]);
        assert_eq!(kept(&["--sense-key=5"]), ["--sense-key=5"]);
        assert_eq!(kept(&["-h3"]), ["-h3"]);
    }

    #[test]
    fn unknown_long_is_dropped_without_eating_next() {
        let out = filter(&["--bogus", "-h", "1"]);
        assert_eq!(out.dropped, ["--bogus"]);
        assert_eq!(out.args.len(), 3);
    }

    #[test]
    fn unknown_short_is_dropped() {
        assert_eq!(kept(&["-x", "-d", "8"]), ["-d", "8"]);
    }

    #[test]
    fn cluster_keeps_known_shorts() {
        let out = filter(&["-xh", "4"]);
        assert_eq!(out.dropped, ["-xh"]);
        assert_eq!(kept(&["-xh", "4"]), ["-h", "4"]);
        assert_eq!(kept(&["-xh4"]), ["-h4"]);
    }

    #[test]
    fn option_value_may_look_like_a_flag() {
        assert_eq!(kept(&["-h", "-1"]), ["-h", "-1"]);
        assert_eq!(kept(&["--plugin", "-7", "-s", "2"]), ["--plugin", "-7", "-s", "2"]);
    }

    #[test]
    fn stray_words_and_numbers_are_dropped() {
        let out = filter(&["foo", "-h", "0", "-1", "bar"]);
        assert_eq!(out.dropped, ["foo", "-1", "bar"]);
        assert_eq!(kept(&["foo", "-h", "0", "-1", "bar"]), ["-h", "0"]);
    }

    #[test]
    fn everything_after_double_dash_is_dropped() {
        let out = filter(&["-s", "1", "--", "-h", "2"]);
        assert_eq!(out.dropped, ["--", "-h", "2"]);
        assert_eq!(kept(&["-s", "1", "--", "-h", "2"]), ["-s", "1"]);
    }

    #[test]
    fn flags_without_values_keep_following_token_separate() {
        assert_eq!(kept(&["--verbose", "-h", "0"]), ["--verbose", "-h", "0"]);
        assert_eq!(kept(&["-v"]), ["-v"]);
        assert_eq!(kept(&["--help"]), ["--help"]);
    }

    #[test]
    fn option_followed_by_unknown_flag_is_dropped_with_it() {
        let out = filter(&["-d", "-x", "-h", "1"]);
        assert_eq!(out.dropped, ["-d", "-x"]);
        assert_eq!(kept(&["-d", "-x", "-h", "1"]), ["-h", "1"]);
        assert_eq!(kept(&["--device", "--bogus", "-s", "2"]), ["-s", "2"]);
    }

    #[test]
    fn option_followed_by_known_flag_is_dropped() {
        assert_eq!(kept(&["-d", "-h", "1"]), ["-h", "1"]);
        assert_eq!(kept(&["--verbose", "-p", "--", "-h", "1"]), ["--verbose"]);
    }

    #[test]
    fn cluster_loses_only_the_valueless_option() {
        let out = filter(&["-vh", "-q"]);
        assert_eq!(out.dropped, ["-vh", "-q"]);
        assert_eq!(kept(&["-vh", "-q"]), ["-v"]);
    }

    #[test]
    fn trailing_option_without_value_is_dropped() {
        assert_eq!(filter(&["-h", "0", "-a"]).dropped, ["-a"]);
        assert_eq!(kept(&["-h", "0", "-a"]), ["-h", "0"]);
    }
}
