//! Generate, compile, and run the keystore converter.

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{
    AppError, CommandSpec, ConversionOutcome, ConversionRequest, ConverterArtifacts,
    ProcessOutput,
};
use crate::ports::{CommandRunner, ConverterWorkspace};

/// Execute one conversion run.
///
/// Build and convert failures come back as `Ok` outcomes and leave the
/// generated source and class file in place. On success the converter's
/// stdout is printed before the transient artifacts are removed, so a failed
/// removal still shows which keystore was written.
pub fn execute<W, R>(
    ctx: &AppContext<W, R>,
    request: &ConversionRequest,
) -> Result<ConversionOutcome, AppError>
where
    W: ConverterWorkspace,
    R: CommandRunner,
{
    let artifacts = ConverterArtifacts::new(ctx.source().class_name());
    let source_file = artifacts.source_file();

    ctx.workspace().write_file(&source_file, ctx.source().source())?;
    debug!(path = %source_file.display(), "wrote converter source");

    println!("Compiling converter...");
    let build = run_step(ctx, &ctx.toolchain().compile_command(&artifacts))?;
    if !build.is_success() {
        info!(status = ?build.status, "converter build failed");
        return Ok(ConversionOutcome::BuildFailed { output: build });
    }

    println!("Converting keystore...");
    let conversion = run_step(ctx, &ctx.toolchain().run_command(&artifacts, request))?;
    if !conversion.is_success() {
        info!(status = ?conversion.status, alias = %request.alias, "keystore conversion failed");
        return Ok(ConversionOutcome::ConvertFailed { output: conversion });
    }

    println!("{}", conversion.stdout.trim_end());

    for path in artifacts.transient_files() {
        ctx.workspace().remove_file(&path)?;
        debug!(path = %path.display(), "removed converter artifact");
    }

    info!(input = %request.input, output = %request.output, "keystore converted");
    Ok(ConversionOutcome::Converted { output: conversion })
}

/// Print the failure section for a finished run.
///
/// A successful run has already printed the converter's output in `execute`.
pub fn report(outcome: &ConversionOutcome) {
    match outcome {
        ConversionOutcome::Converted { .. } => {}
        ConversionOutcome::BuildFailed { output } => {
            println!("Compilation failed:");
            println!("{}", output.stderr.trim_end());
        }
        ConversionOutcome::ConvertFailed { output } => {
            println!("Conversion failed:");
            println!("{}", output.stderr.trim_end());
        }
    }
}

fn run_step<W, R>(
    ctx: &AppContext<W, R>,
    command: &CommandSpec,
) -> Result<ProcessOutput, AppError>
where
    W: ConverterWorkspace,
    R: CommandRunner,
{
    ctx.runner().run(command, ctx.workspace().root())
}
