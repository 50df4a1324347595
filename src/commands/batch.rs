//! Batch solving of recorded games
//!
//! Reads `game_id,pattern_initial,target_word` records from CSV, validates
//! each one, solves the valid games and writes one result row per game.

use crate::output::print_game_line;
use crate::solver::{SolveResult, Solver};
use crate::wordlists::load_from_file;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Header row of the results file
pub const OUTPUT_HEADER: [&str; 5] = [
    "game_id",
    "total_incercari",
    "cuvant_gasit",
    "status",
    "secventa_incercari",
];

/// Errors that abort a whole batch
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a single input record was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRecord {
    #[error("too few fields (expected 3).")]
    TooFewFields,
    #[error("empty fields.")]
    EmptyFields,
    #[error("length mismatch (pattern={pattern} vs word={word}).")]
    LengthMismatch { pattern: usize, word: usize },
}

/// One validated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub game_id: String,
    pub pattern: String,
    pub target: String,
}

/// Settings for a batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dictionary: PathBuf,
    pub skip_header: bool,
    pub verbose: bool,
}

/// Counters gathered while solving a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchStats {
    pub total_games_valid: usize,
    pub total_games_invalid: usize,
    pub sum_attempts: usize,
    pub all_ok: bool,
    pub invalid_messages: Vec<String>,
}

impl Default for BatchStats {
    fn default() -> Self {
        Self {
            total_games_valid: 0,
            total_games_invalid: 0,
            sum_attempts: 0,
            all_ok: true,
            invalid_messages: Vec::new(),
        }
    }
}

impl BatchStats {
    fn record_result(&mut self, result: &SolveResult) {
        self.total_games_valid += 1;
        self.sum_attempts += result.total_attempts;
        if !result.status.is_ok() {
            self.all_ok = false;
        }
    }

    fn record_invalid(&mut self, line_no: usize, reason: &InvalidRecord) {
        let message = format!("Line {line_no}: {reason}");
        warn!("{message}");
        self.total_games_invalid += 1;
        self.invalid_messages.push(message);
    }
}

/// Result of a file-to-file batch run
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub stats: BatchStats,
    pub dictionary_size: usize,
    pub output_csv: PathBuf,
}

/// Validate one CSV record
///
/// Fields are trimmed; extra fields past the third are ignored. Lengths are
/// compared in characters.
///
/// # Errors
///
/// Returns the reason the record can't be played.
pub fn parse_record(record: &csv::StringRecord) -> Result<GameRecord, InvalidRecord> {
    if record.len() < 3 {
        return Err(InvalidRecord::TooFewFields);
    }

    let field = |i: usize| record.get(i).unwrap_or_default().trim().to_string();
    let (game_id, pattern, target) = (field(0), field(1), field(2));

    if game_id.is_empty() || pattern.is_empty() || target.is_empty() {
        return Err(InvalidRecord::EmptyFields);
    }

    let pattern_len = pattern.chars().count();
    let target_len = target.chars().count();
    if pattern_len != target_len {
        return Err(InvalidRecord::LengthMismatch {
            pattern: pattern_len,
            word: target_len,
        });
    }

    Ok(GameRecord {
        game_id,
        pattern,
        target,
    })
}

/// Read every input row, keeping blank lines as `None`
///
/// Blank lines are rows without fields; they keep their place so row numbers
/// match the physical input. A record spanning several lines counts as one row.
///
/// # Errors
///
/// Returns a CSV error for malformed or non UTF-8 records.
pub fn read_rows(data: &[u8]) -> Result<Vec<Option<csv::StringRecord>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    // end of the previous record's content, if there was one
    let mut content_end: Option<usize> = None;
    let mut consumed = 0;

    while reader.read_record(&mut record)? {
        let start = consumed + terminator_run(&data[consumed..]);
        let gap_start = content_end.unwrap_or(0);
        let blanks = blank_lines(&data[gap_start..start], content_end.is_some());
        rows.extend(std::iter::repeat_n(None, blanks));
        rows.push(Some(record.clone()));

        consumed = usize::try_from(reader.position().byte())
            .map_or(data.len(), |pos| pos.min(data.len()));
        content_end = Some(consumed - terminator_run_back(&data[..consumed]));
    }

    let gap_start = content_end.unwrap_or(0);
    let blanks = blank_lines(&data[gap_start..], content_end.is_some());
    rows.extend(std::iter::repeat_n(None, blanks));

    Ok(rows)
}

fn is_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Length of the leading run of line terminators
fn terminator_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| is_terminator(b)).count()
}

/// Length of the trailing run of line terminators
fn terminator_run_back(bytes: &[u8]) -> usize {
    bytes.iter().rev().take_while(|&&b| is_terminator(b)).count()
}

/// Blank lines in a run of terminators
///
/// `\r\n`, `\n` and a lone `\r` each end one line. After a record the first
/// break only ends that record.
fn blank_lines(gap: &[u8], after_record: bool) -> usize {
    let breaks = gap
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && gap.get(i + 1) != Some(&b'\n')))
        .count();
    if after_record {
        breaks.saturating_sub(1)
    } else {
        breaks
    }
}

/// Solve every record from `input` and write result rows to `output`
///
/// Row numbers in diagnostics start at 1, count the skipped header and count
/// blank lines, which are reported as having too few fields.
///
/// # Errors
///
/// Returns `BatchError::Csv` if the input can't be read as CSV or the output
/// can't be written.
pub fn solve_records<R: Read, W: Write>(
    solver: &Solver,
    mut input: R,
    output: W,
    skip_header: bool,
    verbose: bool,
) -> Result<BatchStats, BatchError> {
    let mut data = Vec::new();
    input.read_to_end(&mut data).map_err(csv::Error::from)?;
    let rows = read_rows(&data)?;

    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(OUTPUT_HEADER)?;

    let progress = if verbose {
        ProgressBar::hidden()
    } else {
        progress_spinner()
    };

    let mut stats = BatchStats::default();
    let offset = usize::from(skip_header);

    for (idx, row) in rows.iter().skip(offset).enumerate() {
        let line_no = idx + 1 + offset;
        progress.inc(1);

        let Some(record) = row else {
            stats.record_invalid(line_no, &InvalidRecord::TooFewFields);
            continue;
        };

        let game = match parse_record(record) {
            Ok(game) => game,
            Err(reason) => {
                stats.record_invalid(line_no, &reason);
                continue;
            }
        };

        let result = solver.solve_one(&game.game_id, &game.pattern, &game.target);
        stats.record_result(&result);

        let total = result.total_attempts.to_string();
        let attempts = result.attempts_joined();
        writer.write_record([
            result.game_id.as_str(),
            total.as_str(),
            result.found_word.as_str(),
            result.status.as_str(),
            attempts.as_str(),
        ])?;

        if verbose {
            print_game_line(&result, &game.pattern);
        }
        progress.set_message(format!("sum attempts: {}", stats.sum_attempts));
    }

    progress.finish_and_clear();
    writer.flush().map_err(csv::Error::from)?;

    Ok(stats)
}

/// Load the dictionary, solve the input file and write the output file
///
/// Creates the output file's parent directory if it doesn't exist.
///
/// # Errors
///
/// Returns `BatchError::Io` if a file can't be opened or created, and
/// `BatchError::Csv` for malformed input.
pub fn solve_file(options: &BatchOptions) -> Result<BatchSummary, BatchError> {
    let words = load_from_file(&options.dictionary).map_err(io_error(&options.dictionary))?;
    let solver = Solver::new(words);
    info!(
        "Loaded {} dictionary words from {}",
        solver.dictionary().len(),
        options.dictionary.display()
    );

    if let Some(parent) = options
        .output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let input = File::open(&options.input).map_err(io_error(&options.input))?;
    let output = File::create(&options.output).map_err(io_error(&options.output))?;

    let stats = solve_records(
        &solver,
        BufReader::new(input),
        BufWriter::new(output),
        options.skip_header,
        options.verbose,
    )?;

    info!(
        "Solved {} games ({} invalid lines)",
        stats.total_games_valid, stats.total_games_invalid
    );

    Ok(BatchSummary {
        stats,
        dictionary_size: solver.dictionary().len(),
        output_csv: options.output.clone(),
    })
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> BatchError + '_ {
    move |source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn progress_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} records | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn setup_solver() -> Solver {
        Solver::new(["mama", "mare", "masa", "casa", "stomac", "stofa", "strat"])
    }

    fn run(input: &str, skip_header: bool) -> (BatchStats, String) {
        let solver = setup_solver();
        let mut output = Vec::new();
        let stats =
            solve_records(&solver, Cursor::new(input), &mut output, skip_header, false).unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn parse_record_trims_fields() {
        let game = parse_record(&record(&[" 7 ", " ST*** ", "strat "])).unwrap();
        assert_eq!(
            game,
            GameRecord {
                game_id: "7".to_string(),
                pattern: "ST***".to_string(),
                target: "strat".to_string(),
            }
        );
    }

    #[test]
    fn parse_record_ignores_extra_fields() {
        let game = parse_record(&record(&["1", "c***", "casa", "note"])).unwrap();
        assert_eq!(game.target, "casa");
    }

    #[test]
    fn parse_record_too_few_fields() {
        assert_eq!(
            parse_record(&record(&["1", "c***"])),
            Err(InvalidRecord::TooFewFields)
        );
    }

    #[test]
    fn parse_record_empty_fields() {
        assert_eq!(
            parse_record(&record(&["1", "  ", "casa"])),
            Err(InvalidRecord::EmptyFields)
        );
    }

    #[test]
    fn parse_record_length_mismatch_counts_characters() {
        assert_eq!(
            parse_record(&record(&["1", "***", "țară"])),
            Err(InvalidRecord::LengthMismatch {
                pattern: 3,
                word: 4
            })
        );
        assert!(parse_record(&record(&["1", "****", "țară"])).is_ok());
    }

    #[test]
    fn writes_header_and_rows() {
        let (stats, output) = run("g1,****,masa\ng2,casa,casa\n", false);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "game_id,total_incercari,cuvant_gasit,status,secventa_incercari",
                "g1,3,masa,OK,a m s",
                "g2,0,casa,OK,",
            ]
        );
        assert_eq!(stats.total_games_valid, 2);
        assert_eq!(stats.total_games_invalid, 0);
        assert_eq!(stats.sum_attempts, 3);
        assert!(stats.all_ok);
    }

    #[test]
    fn skip_header_shifts_line_numbers() {
        let input = "game_id,pattern,word\ng1,****,masa\ng2,**,casa\n";
        let (stats, _) = run(input, true);

        assert_eq!(stats.total_games_valid, 1);
        assert_eq!(stats.total_games_invalid, 1);
        assert_eq!(
            stats.invalid_messages,
            vec!["Line 3: length mismatch (pattern=2 vs word=4).".to_string()]
        );
    }

    #[test]
    fn invalid_lines_are_reported_not_written() {
        let input = "g1,c***\ng2,,casa\ng3,c***,casa\n";
        let (stats, output) = run(input, false);

        assert_eq!(stats.total_games_invalid, 2);
        assert_eq!(
            stats.invalid_messages,
            vec![
                "Line 1: too few fields (expected 3).".to_string(),
                "Line 2: empty fields.".to_string(),
            ]
        );
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("g3,0,casa,OK,"));
    }

    #[test]
    fn blank_line_counts_as_invalid_row() {
        let (stats, output) = run("g1,****,masa\n\ng2,**,casa\n", false);

        assert_eq!(stats.total_games_valid, 1);
        assert_eq!(stats.total_games_invalid, 2);
        assert_eq!(
            stats.invalid_messages,
            vec![
                "Line 2: too few fields (expected 3).".to_string(),
                "Line 3: length mismatch (pattern=2 vs word=4).".to_string(),
            ]
        );
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn blank_lines_with_crlf_and_trailing() {
        let input = "g1,****,masa\r\n\r\n\r\ng2,casa,casa\r\n\r\n";
        let (stats, _) = run(input, false);

        assert_eq!(stats.total_games_valid, 2);
        assert_eq!(
            stats.invalid_messages,
            vec![
                "Line 2: too few fields (expected 3).".to_string(),
                "Line 3: too few fields (expected 3).".to_string(),
                "Line 5: too few fields (expected 3).".to_string(),
            ]
        );
    }

    #[test]
    fn leading_blank_line_is_the_skipped_header() {
        let (stats, _) = run("\ng1,****,masa\n", true);

        assert_eq!(stats.total_games_valid, 1);
        assert_eq!(stats.total_games_invalid, 0);
    }

    #[test]
    fn read_rows_keeps_blank_positions() {
        let rows = read_rows(b"\na,b\n\n\"x\ny\",z\nc\n\n").unwrap();
        let shape: Vec<Option<usize>> = rows.iter().map(|r| r.as_ref().map(csv::StringRecord::len)).collect();

        assert_eq!(shape, vec![None, Some(2), None, Some(2), Some(1), None]);
        assert_eq!(rows[3].as_ref().and_then(|r| r.get(0)), Some("x\ny"));
    }

    #[test]
    fn read_rows_without_trailing_newline() {
        let rows = read_rows(b"a,b\nc").unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(Option::is_some));

        assert!(read_rows(b"").unwrap().is_empty());
        assert_eq!(read_rows(b"\n\n").unwrap().len(), 2);
    }

    #[test]
    fn failed_game_clears_all_ok() {
        let (stats, output) = run("g1,z***,zori\n", false);

        assert!(!stats.all_ok);
        assert!(output.contains("g1,0,z,FAIL,"));
    }

    #[test]
    fn empty_input_is_all_ok() {
        let (stats, output) = run("", false);

        assert_eq!(stats, BatchStats::default());
        assert!(stats.all_ok);
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn quoted_fields_are_unquoted() {
        let (stats, output) = run("\"g,1\",\"****\",\"masa\"\n", false);

        assert_eq!(stats.total_games_valid, 1);
        assert!(output.contains("\"g,1\",3,masa,OK,a m s"));
    }

    #[test]
    fn solve_file_creates_output_directory() {
        let dir = std::env::temp_dir().join(format!("hangman_solver_batch_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let dictionary = dir.join("dict.txt");
        let input = dir.join("games.csv");
        let output = dir.join("out").join("results.csv");
        fs::write(&dictionary, "Stomac\nstofa\n\nstrat\n").unwrap();
        fs::write(&input, "game_id,pattern,word\n1,st****,stomac\n2,st***,strat\n").unwrap();

        let options = BatchOptions {
            input,
            output: output.clone(),
            dictionary,
            skip_header: true,
            verbose: false,
        };
        let summary = solve_file(&options).unwrap();

        assert_eq!(summary.dictionary_size, 3);
        assert_eq!(summary.stats.total_games_valid, 2);
        assert!(summary.stats.all_ok);
        assert_eq!(summary.output_csv, output);

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("game_id,total_incercari"));
        assert!(written.contains("1,0,stomac,OK,"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn solve_file_missing_dictionary() {
        let options = BatchOptions {
            input: PathBuf::from("/nonexistent/games.csv"),
            output: std::env::temp_dir().join("hangman_solver_unused.csv"),
            dictionary: PathBuf::from("/nonexistent/dict.txt"),
            skip_header: false,
            verbose: false,
        };

        let err = solve_file(&options).unwrap_err();
        assert!(matches!(err, BatchError::Io { ref path, .. } if path.ends_with("dict.txt")));
        assert!(err.to_string().starts_with("cannot access /nonexistent/dict.txt"));
    }
}
