mod output;
mod program;

pub use program::ProgramExport;

#[cfg(test)]
pub(crate) use program::program_tests::SharedBuffer;
