use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Per-tick move log: one line per tick holding the altitude delta of
/// every balloon in fleet order. Finalizing renames the file so the
/// final score is part of the name.
pub struct MoveLog {
    path: PathBuf,
    out: BufWriter<File>,
}

impl MoveLog {
    pub fn create(dir: &Path) -> io::Result<Self> {
        let path = dir.join("moves.log");
        let out = BufWriter::new(File::create(&path)?);
        Ok(Self { path, out })
    }

    pub fn append(&mut self, deltas: &[i8]) -> io::Result<()> {
        let line: Vec<String> = deltas.iter().map(|d| d.to_string()).collect();
        writeln!(self.out, "{}", line.join(" "))
    }

    pub fn finalize(self, score: u64) -> io::Result<PathBuf> {
        let MoveLog { path, mut out } = self;
        out.flush()?;
        drop(out);
        let renamed = path.with_file_name(format!("moves_{}.log", score));
        fs::rename(&path, &renamed)?;
        Ok(renamed)
    }
}
