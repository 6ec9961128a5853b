//! Printing of the generated parts of the single header.

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::directive::COMMENT_START;

/// Format of the generation timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Prints the license banner, the generation note and the opening include guard.
pub fn print_header<W: Write>(
    out: &mut W,
    license: &str,
    timestamp: &DateTime<Utc>,
    guard: &str,
) -> io::Result<()> {
    for line in license.lines() {
        writeln!(out, "{} {}", COMMENT_START, line)?;
    }
    writeln!(out, "{} This file was generated with a script.", COMMENT_START)?;
    writeln!(
        out,
        "{} Generated {} UTC",
        COMMENT_START,
        timestamp.format(TIMESTAMP_FORMAT)
    )?;
    writeln!(out)?;
    writeln!(out, "#ifndef {}", guard)?;
    writeln!(out, "#define {}", guard)?;
    writeln!(out)
}

pub fn print_footer<W: Write>(out: &mut W, guard: &str) -> io::Result<()> {
    writeln!(out, "#endif {} {}", COMMENT_START, guard)?;
    writeln!(out)
}

pub fn print_begin<W: Write>(out: &mut W, file: &str) -> io::Result<()> {
    writeln!(out, "{} beginning of {}", COMMENT_START, file)?;
    writeln!(out)
}

pub fn print_end<W: Write>(out: &mut W, file: &str) -> io::Result<()> {
    writeln!(out, "{} end of {}", COMMENT_START, file)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn timestamp() -> DateTime<Utc> {
        let naive = NaiveDate::from_ymd_opt(2018, 5, 15)
            .and_then(|date| date.and_hms_micro_opt(18, 2, 44, 541_123))
            .unwrap();
        Utc.from_utc_datetime(&naive)
    }

    #[test]
    fn header() {
        let mut out = vec![];
        print_header(
            &mut out,
            "MIT License\n\nCopyright (c) 2018 Vladimir Talybin\n",
            &timestamp(),
            "REST_SINGLE_INCLUDE_HPP",
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "// MIT License\n\
             // \n\
             // Copyright (c) 2018 Vladimir Talybin\n\
             // This file was generated with a script.\n\
             // Generated 2018-05-15 18:02:44.541123 UTC\n\
             \n\
             #ifndef REST_SINGLE_INCLUDE_HPP\n\
             #define REST_SINGLE_INCLUDE_HPP\n\
             \n"
        );
    }

    #[test]
    fn footer() {
        let mut out = vec![];
        print_footer(&mut out, "REST_SINGLE_INCLUDE_HPP").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#endif // REST_SINGLE_INCLUDE_HPP\n\n"
        );
    }

    #[test]
    fn markers() {
        let mut out = vec![];
        print_begin(&mut out, "rest/path.hpp").unwrap();
        print_end(&mut out, "rest/path.hpp").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "// beginning of rest/path.hpp\n\n// end of rest/path.hpp\n\n"
        );
    }
}
