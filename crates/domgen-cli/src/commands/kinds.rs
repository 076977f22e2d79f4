//! Implementation of the `domgen kinds` command.

use domgen_adapters::{DirectoryTemplateStore, builtin_templates};
use domgen_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::{KindsArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: KindsArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let origin = builtin_templates::resolve(
        args.templates
            .as_deref()
            .or(config.templates.dir.as_deref()),
    );
    let unrecognized = origin
        .dir()
        .map(|dir| DirectoryTemplateStore::new(dir).unrecognized())
        .unwrap_or_default();

    let service = TemplateService::new(origin.into_store());
    let kinds = service.list()?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Component kinds ({}):", service.source()))?;
            for info in &kinds {
                output.print(&table_row(info))?;
            }
            for path in &unrecognized {
                output.warning(&format!(
                    "{} does not match any component kind and is ignored",
                    path.display()
                ))?;
            }
            let missing = service.missing();
            if !missing.is_empty() {
                output.warning(&format!(
                    "{} template(s) missing; generation will fail until they are added",
                    missing.len()
                ))?;
            }
        }

        // JSON and plain lists bypass quiet mode; they are the result.
        ListFormat::Json => output.json(&kinds)?,

        ListFormat::List => {
            for info in &kinds {
                output.data(info.kind.as_str())?;
            }
        }

        ListFormat::Csv => {
            output.data("kind,template,output,available")?;
            for info in &kinds {
                output.data(&csv_row(info))?;
            }
        }
    }

    Ok(())
}

fn table_row(info: &TemplateInfo) -> String {
    format!(
        "  {:<11} {:<22} {:<26} {}",
        info.kind.as_str(),
        info.template_file,
        info.output_file,
        if info.available { "ok" } else { "missing" }
    )
}

fn csv_row(info: &TemplateInfo) -> String {
    format!(
        "{},{},{},{}",
        info.kind.as_str(),
        info.template_file,
        info.output_file,
        info.available
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domgen_core::domain::ComponentKind;

    fn info(kind: ComponentKind, available: bool) -> TemplateInfo {
        TemplateInfo {
            kind,
            template_file: kind.template_file_name(),
            output_file: format!("Example{}.java", kind.as_str()),
            available,
        }
    }

    #[test]
    fn csv_row_has_four_columns() {
        let row = csv_row(&info(ComponentKind::Service, true));
        assert_eq!(row, "Service,Service.java.hbs,ExampleService.java,true");
    }

    #[test]
    fn table_row_flags_missing_template() {
        let row = table_row(&info(ComponentKind::Dto, false));
        assert!(row.trim_start().starts_with("DTO"));
        assert!(row.ends_with("missing"));
    }
}
