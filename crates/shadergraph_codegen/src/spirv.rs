// SPDX-License-Identifier: MIT OR Apache-2.0
//! Bridge to an external GLSL to SPIR-V compiler.
//!
//! Each compiler library needs a one-time process initialization. It runs the
//! first time a conversion through that library is requested and never again.

use parking_lot::Mutex;
use shadergraph_graph::ShaderStage;

/// Libraries whose process initialization has completed
static INITIALIZED: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

/// External GLSL to SPIR-V compiler
pub trait SpirvCompiler: Send + Sync {
    /// Name of the backing library. Compilers sharing a name share one
    /// process initialization.
    fn library_name(&self) -> &'static str;

    /// Process-wide library setup, called at most once per process
    fn initialize_process(&self);

    /// Compile GLSL source for `stage` into SPIR-V bytes
    fn compile(&self, source: &str, stage: ShaderStage) -> Result<Vec<u8>, String>;
}

/// Run the compiler's process initialization if it has not run yet.
///
/// Concurrent callers block until the initialization has finished.
pub fn ensure_initialized(compiler: &dyn SpirvCompiler) {
    let library = compiler.library_name();
    let mut initialized = INITIALIZED.lock();
    if initialized.contains(&library) {
        return;
    }
    tracing::debug!("Initializing SPIR-V compiler '{}'", library);
    compiler.initialize_process();
    initialized.push(library);
}

/// Convert generated GLSL into SPIR-V. Returns an empty buffer on failure.
pub fn convert_glsl_to_spirv(compiler: &dyn SpirvCompiler, glsl: &[u8], stage: ShaderStage) -> Vec<u8> {
    ensure_initialized(compiler);

    let source = match std::str::from_utf8(glsl) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("GLSL source for {:?} stage is not UTF-8: {}", stage, e);
            return Vec::new();
        }
    };

    match compiler.compile(source, stage) {
        Ok(spirv) => {
            tracing::debug!("Compiled {:?} stage to {} bytes of SPIR-V", stage, spirv.len());
            spirv
        }
        Err(e) => {
            tracing::error!("SPIR-V compilation of {:?} stage failed: {}", stage, e);
            Vec::new()
        }
    }
}
