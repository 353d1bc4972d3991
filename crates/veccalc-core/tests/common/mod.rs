use veccalc_core::{apply, Command, Result, VarStore};

/// Split a raw line into keyword + argument words and run it through
/// parse + apply, the way the CLI loop does
#[allow(dead_code)]
pub fn run_line(store: &mut VarStore, line: &str) -> Result<String> {
    let mut words = line.split_whitespace();
    let keyword = words.next().expect("test lines are non-empty");
    let args: Vec<&str> = words.collect();

    Command::parse(keyword, &args).and_then(|command| apply(store, command))
}
