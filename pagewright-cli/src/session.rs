//! One CLI invocation against a store-backed editor.

use std::fs;
use std::io::Write;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use pagewright_codegen::ExportFormat;
use pagewright_core::{
    BrandField, Columns, Editor, ElementId, ElementKind, Premade, Role, StateStore, Template,
    Theme,
};

use crate::{CliCommand, CliConfig};

/// An editor opened on the configured data directory.
#[derive(Debug)]
pub struct Session {
    editor: Editor,
    config: CliConfig,
}

impl Session {
    /// Open the document and projects stored under `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory can't be created.
    pub fn open(config: CliConfig) -> Result<Self> {
        let store = StateStore::with_data_dir(&config.data_dir).with_context(|| {
            format!(
                "Failed to open data directory {}",
                config.data_dir.display()
            )
        })?;
        let mut editor = Editor::with_store(store);
        editor.set_project_name(config.project.clone());
        tracing::debug!(
            "Opened session in {} with {} elements",
            config.data_dir.display(),
            editor.state().len()
        );
        Ok(Self { editor, config })
    }

    /// The underlying editor.
    #[must_use]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Run one command, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown ids, names or formats, malformed import
    /// files and failed writes. The document is unchanged in every error
    /// case.
    #[allow(clippy::too_many_lines)]
    pub fn run(&mut self, command: CliCommand, out: &mut impl Write) -> Result<()> {
        match command {
            CliCommand::Add { kind } => {
                let kind: ElementKind = kind.parse()?;
                let id = self.editor.add_element(kind);
                writeln!(out, "{id}")?;
            }
            CliCommand::Label { id, text } => {
                let id = self.existing(&id)?;
                self.editor.update_label(&id, &text);
            }
            CliCommand::Delete { id } => {
                let id = self.existing(&id)?;
                self.editor.delete_element(&id);
            }
            CliCommand::Duplicate { id } => {
                let id = self.existing(&id)?;
                if let Some(copy) = self.editor.duplicate_element(&id) {
                    writeln!(out, "{copy}")?;
                }
            }
            CliCommand::Move { id, direction } => {
                let id = self.existing(&id)?;
                if !self.editor.move_element(&id, direction.into()) {
                    tracing::info!("{id} is already at the edge, nothing moved");
                }
            }
            CliCommand::Reorder { from, to } => {
                let from = self.existing(&from)?;
                let to = self.existing(&to)?;
                self.editor.reorder(&from, &to);
            }
            CliCommand::Prompt { text } => {
                for id in self.editor.synthesize(&text.join(" ")) {
                    writeln!(out, "{id}")?;
                }
            }
            CliCommand::Chat { text } => {
                self.editor.send_chat(&text.join(" "), Instant::now());
                self.editor.resolve_all_replies();
                let reply = self
                    .editor
                    .conversation()
                    .messages()
                    .iter()
                    .rev()
                    .find(|m| m.role == Role::Assistant);
                if let Some(reply) = reply {
                    writeln!(out, "{}", reply.text)?;
                }
            }
            CliCommand::Template { name } => {
                let template: Template = name.parse()?;
                for id in self.editor.insert_template(template) {
                    writeln!(out, "{id}")?;
                }
            }
            CliCommand::Premade { name } => {
                let premade: Premade = name.parse()?;
                self.editor.load_premade(premade);
                writeln!(out, "Loaded {}", premade.name())?;
            }
            CliCommand::Theme { name } => {
                let theme: Theme = name.parse()?;
                self.editor.set_theme(theme);
            }
            CliCommand::Columns { count } => {
                let columns = Columns::try_from(count).map_err(anyhow::Error::msg)?;
                self.editor.set_columns(columns);
            }
            CliCommand::Clear => {
                self.editor.clear_canvas();
            }
            CliCommand::Brand {
                primary,
                secondary,
                accent,
                radius,
                font,
                glass,
            } => {
                let mut brand = self.editor.state().brand.clone();
                if let Some(primary) = primary {
                    brand.primary = primary;
                }
                if let Some(secondary) = secondary {
                    brand.secondary = secondary;
                }
                if let Some(accent) = accent {
                    brand.accent = accent;
                }
                if let Some(radius) = radius {
                    brand.radius = radius;
                }
                if let Some(font) = font {
                    brand.font = font.into();
                }
                if let Some(glass) = glass {
                    brand.glass = glass;
                }
                self.editor.set_brand(brand);
            }
            CliCommand::SyncBrand { fields } => {
                let fields: Vec<BrandField> = if fields.is_empty() {
                    BrandField::ALL.to_vec()
                } else {
                    fields.into_iter().map(Into::into).collect()
                };
                self.editor.sync_brand(&fields);
            }
            CliCommand::Export { format, output } => {
                let format: ExportFormat = format.parse()?;
                let export = pagewright_codegen::export(self.editor.state(), format);
                match output {
                    Some(path) => {
                        fs::write(&path, &export.contents)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        writeln!(out, "Wrote {}", path.display())?;
                    }
                    None => write!(out, "{}", export.contents)?,
                }
            }
            CliCommand::Import { file } => {
                let text = fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                self.editor
                    .import_json(&text)
                    .with_context(|| format!("Failed to import {}", file.display()))?;
                writeln!(out, "Imported {} elements", self.editor.state().len())?;
            }
            CliCommand::Save { name } => {
                let name = name.unwrap_or_else(|| self.config.project.clone());
                self.editor.set_project_name(name.clone());
                self.editor.save_project();
                writeln!(out, "Saved {name}")?;
            }
            CliCommand::Load { name } => {
                self.editor.load_project(&name)?;
                writeln!(out, "Loaded {name}")?;
            }
            CliCommand::Projects => {
                for project in self.editor.projects().iter() {
                    writeln!(
                        out,
                        "{}\t{} elements\t{}",
                        project.name,
                        project.state.len(),
                        project.saved_at
                    )?;
                }
            }
            CliCommand::DeleteProject { name } => {
                self.editor.delete_project(&name)?;
            }
            CliCommand::List => {
                for element in &self.editor.state().elements {
                    writeln!(out, "{}\t{}\t{}", element.id, element.kind, element.label)?;
                }
            }
        }
        Ok(())
    }

    fn existing(&self, id: &str) -> Result<ElementId> {
        let id = ElementId::new(id);
        if !self.editor.state().contains(&id) {
            bail!("No element with id {id}");
        }
        Ok(id)
    }
}
