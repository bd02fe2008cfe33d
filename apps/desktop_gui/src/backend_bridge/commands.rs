//! Backend commands queued from UI to backend worker.

use client_core::FormInputSet;

pub enum BackendCommand {
    Generate { input: FormInputSet },
    LoadExamples,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Generate { .. } => "generate",
            BackendCommand::LoadExamples => "load_examples",
        }
    }
}
