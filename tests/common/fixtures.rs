//! Test fixtures.

use assert_cmd::Command;

/// A slice of a header written in the style the filter targets.
#[allow(dead_code)]
pub const PILOT_HEADER: &str = "\
#ifndef PILOT_H
#define PILOT_H

#define PI_MAX_PROCS 256

/*!
 * Writes formatted data to a channel.
 */
#define PI_Write(c, f, ...) \\
    PI_Write_(__FILE__, __LINE__, c, f, ##__VA_ARGS__)
int PI_Write_(const char *file, int line, PI_CHANNEL *c, const char *f, ...);

/*! Aborts the program. */
#define PI_Abort(e, m, ...) PI_Abort_(e, m, __FILE__, __LINE__)
void PI_Abort_(int e, const char *m, const char *file, int line);

#define PI_Log(x = 0) \\
    log(x)
#endif
";

/// `PILOT_HEADER` after both stages.
#[allow(dead_code)]
pub const PILOT_FILTERED: &str = "\
#ifndef PILOT_H
#define PILOT_H

#define PI_MAX_PROCS 256

/*!
 * Writes formatted data to a channel.
 */
int PI_Write(const char *file, int line, PI_CHANNEL *c, const char *f, ...);

/*! Aborts the program. */
void PI_Abort(int e, const char *m, const char *file, int line);

#define PI_Log(x = 0) \\
    log(x)
#endif
";

#[allow(dead_code)]
pub fn filter_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_doxygen_filter"))
}
