use portal_core::{Course, Envelope, Identity, Module};

use crate::cli::OutputFormat;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `portal schema`.
pub fn handle(args: &SchemaArgs, format: OutputFormat) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Envelope => schemars::schema_for!(Envelope),
        SchemaType::Course => schemars::schema_for!(Course),
        SchemaType::Module => schemars::schema_for!(Module),
        SchemaType::Identity => schemars::schema_for!(Identity),
    };
    output(&schema, format)
}
