//! Hook that writes entries to an `io::Write` sink.

use levelhook_core::{BoxError, Hook, Level};
use std::{
    borrow::Cow,
    fmt::Display,
    io::Write,
    sync::{Mutex, PoisonError},
};

/// Writes the `Display` form of each entry, one per line.
///
/// Useful for mirroring selected levels to a second destination, e.g.
/// errors to stderr while the logger writes everything to a file.
/// Write errors are returned from `fire` and show up in the dispatch report.
pub struct WriterHook<W> {
    name: Cow<'static, str>,
    writer: Mutex<W>,
    levels: Vec<Level>,
}

impl<W: Write> WriterHook<W> {
    /// Create a hook named `"writer"` writing entries at `levels` to `writer`.
    pub fn new(writer: W, levels: impl IntoIterator<Item = Level>) -> Self {
        Self::named("writer", writer, levels)
    }

    /// Create a hook with a custom name, e.g. to tell a stderr mirror from
    /// a file mirror in failure reports.
    pub fn named(
        name: impl Into<Cow<'static, str>>,
        writer: W,
        levels: impl IntoIterator<Item = Level>,
    ) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(writer),
            levels: levels.into_iter().collect(),
        }
    }

    /// Take the writer back.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E, W> Hook<E> for WriterHook<W>
where
    E: Display,
    W: Write + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn levels(&self) -> &[Level] {
        &self.levels
    }

    fn fire(&self, entry: &E) -> Result<(), BoxError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{entry}")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelhook_core::LevelHooks;
    use std::io;

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_one_line_per_entry() {
        let hook = WriterHook::new(Vec::<u8>::new(), [Level::Warn]);
        hook.fire(&"first").unwrap();
        hook.fire(&"second").unwrap();
        assert_eq!(hook.into_inner(), b"first\nsecond\n");
    }

    #[test]
    fn test_write_error_becomes_failure() {
        let mut hooks = LevelHooks::<&'static str>::new();
        hooks.add(WriterHook::new(FullDisk, [Level::Error]));

        let failures = hooks.fire(Level::Error, &"boom").unwrap_err();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].hook.name(), "writer");
        assert_eq!(failures[0].error.to_string(), "disk full");
    }

    #[test]
    fn test_named_writers_are_distinguishable() {
        let mut hooks = LevelHooks::<&'static str>::new();
        hooks.add(WriterHook::named("stderr", Vec::<u8>::new(), [Level::Error]));
        hooks.add(WriterHook::named("file", FullDisk, [Level::Error]));
        hooks.add(WriterHook::named(String::from("archive"), FullDisk, [Level::Error]));

        let failures = hooks.fire(Level::Error, &"boom").unwrap_err();
        let names: Vec<&str> = failures.iter().map(|f| f.hook.name()).collect();
        assert_eq!(names, vec!["file", "archive"]);
    }
}
