use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::LoadPipeline;
use crate::utils::progress::ProgressReporter;
use crate::writers::{JsonlWriter, MemorySink};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Load {
            input,
            output_dir,
            quiet,
        } => {
            println!("Loading extract: {}", input.display());
            println!("Output directory: {}", output_dir.display());

            let progress = ProgressReporter::new_spinner("Loading extract...", quiet);

            let mut pipeline = LoadPipeline::new(JsonlWriter::new(output_dir));
            let summary = pipeline.run(&input, Some(&progress))?;

            progress.finish_with_message("Load complete");
            println!("\n{}", summary.summary());
        }

        Commands::Validate { input, quiet } => {
            println!("Validating extract: {}", input.display());

            let progress = ProgressReporter::new_spinner("Validating extract...", quiet);

            let mut pipeline = LoadPipeline::new(MemorySink::new());
            let summary = pipeline.run(&input, Some(&progress))?;

            progress.finish_with_message("Validation complete");
            println!("\n{}", summary.summary());
            println!("Validation passed - no output written");
        }
    }

    Ok(())
}
