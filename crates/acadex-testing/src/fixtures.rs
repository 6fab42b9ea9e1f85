//! Canned question-bank CSVs for import tests.
//!
//! Line numbers matter: the validator reports the header as line 1 and the
//! first data row as line 2, and several tests assert on exact lines.

/// Well-formed bank: every required column plus the optional points.
pub const QUESTIONS_OK: &str = "\
question,option_a,option_b,option_c,option_d,answer,points
What is 2+2?,1,2,3,4,D,2
Which planet is closest to the Sun?,Venus,Mercury,Earth,Mars,B,
";

/// One bad answer (line 2) and one bad points value (line 3).
pub const QUESTIONS_BAD_VALUES: &str = "\
question,option_a,option_b,option_c,option_d,answer,points
What is 2+2?,1,2,3,4,E,1
Capital of France?,Paris,Lyon,Nice,Lille,A,zero
";

/// Header missing four of the six required columns.
pub const QUESTIONS_MISSING_COLUMNS: &str = "question,answer\nWhat is 2+2?,D\n";

/// Header only, no question rows.
pub const QUESTIONS_EMPTY: &str = "question,option_a,option_b,option_c,option_d,answer\n";
