//! Line-oriented storefront shell.
//!
//! Each command maps onto one page action of the storefront. The open design
//! tool is tracked between commands; unsaved edits stay in the design store
//! until the design is saved, finalized, switched away from or the shell
//! exits.

use crate::app::App;
use crate::commands::{Command, CommandHelp};
use creations_core::editor::{self, EditorSession};
use creations_core::element::{DEFAULT_FONT_SIZE, DesignElement, ElementUpdate, ImageUpdate};
use creations_core::preferences::{AVAILABLE_COLORS, AVAILABLE_STYLES, ProfileDraft};
use creations_core::{auth, blog, catalog, feedback};
use creations_core::{ElementId, Notification, OrderSummary, Storage, SuggestionQuery};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Whether the shell keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The design tool currently open.
struct Editing {
    product_id: &'static str,
    selected: Option<ElementId>,
}

pub struct Shell<S: Storage> {
    app: App<S>,
    editing: Option<Editing>,
    /// Color and style picks not yet saved with `prefs-save`.
    profile: Option<ProfileDraft>,
}

impl<S: Storage> Shell<S> {
    pub fn new(app: App<S>) -> Self {
        Self {
            app,
            editing: None,
            profile: None,
        }
    }

    pub fn app(&self) -> &App<S> {
        &self.app
    }

    /// Read commands from `input` until `quit` or end of input, then shut
    /// the app down.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "Welcome to CustomCreations! Type `help` for commands.")?;
        let mut lines = input.lines();

        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            let flow = match Command::parse(&line) {
                Ok(Some(command)) => self.execute(command, out).await?,
                Ok(None) => Flow::Continue,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        self.editing = None;
        self.app.shutdown();
        writeln!(out, "Goodbye!")
    }

    /// Execute one command, writing its result to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        log::debug!("Executing {:?}", command);

        match command {
            Command::Help => {
                for help in CommandHelp::all() {
                    writeln!(out, "  {:45} {}", help.usage, help.description)?;
                }
            }
            Command::Products => {
                for product in catalog::products() {
                    writeln!(
                        out,
                        "  {:8} {:12} {:10} {}",
                        product.id, product.listing_name, product.price_range, product.description
                    )?;
                }
            }
            Command::Design(product_id) => self.open_design(&product_id, out)?,
            Command::Text(content) => self.with_editor(out, |editor, out| {
                match editor.add_text(&content, DEFAULT_TEXT_COLOR, DEFAULT_FONT_SIZE) {
                    Ok(id) => writeln!(out, "Added text {}", id),
                    Err(e) => notify(out, &e.notification()),
                }
            })?,
            Command::Image(src) => self.with_editor(out, |editor, out| match editor.add_image(&src) {
                Ok(id) => writeln!(out, "Added image {}", id),
                Err(e) => notify(out, &e.notification()),
            })?,
            Command::EditText(content) => match editor::text_update(Some(&content), None, None) {
                Ok(update) => self.update_selected(update, "a text element", out)?,
                Err(e) => notify(out, &e.notification())?,
            },
            Command::ImageSrc(src) => match editor::image_update(Some(&src), None, None) {
                Ok(update) => self.update_selected(update, "an image element", out)?,
                Err(e) => notify(out, &e.notification())?,
            },
            Command::Select(id) => self.with_editor(out, |editor, out| {
                if editor.select(&id) {
                    writeln!(out, "Selected {}", id)
                } else {
                    writeln!(out, "No element {} in this design.", id)
                }
            })?,
            Command::Move { x, y } => {
                self.update_selected(ElementUpdate::Move { x, y }, "an element", out)?
            }
            Command::Font(size) => match editor::text_update(None, None, Some(size)) {
                Ok(update) => self.update_selected(update, "a text element", out)?,
                Err(e) => notify(out, &e.notification())?,
            },
            Command::ColorText(color) => match editor::text_update(None, Some(&color), None) {
                Ok(update) => self.update_selected(update, "a text element", out)?,
                Err(e) => notify(out, &e.notification())?,
            },
            Command::Resize { width, height } => {
                let update = ElementUpdate::Image(ImageUpdate {
                    src: None,
                    width: Some(width),
                    height: Some(height),
                });
                self.update_selected(update, "an image element", out)?
            }
            Command::Remove => self.with_editor(out, |editor, out| {
                if editor.remove_selected() {
                    writeln!(out, "Removed.")
                } else {
                    writeln!(out, "Select an element first.")
                }
            })?,
            Command::Layers => self.with_editor(out, write_layers::<S, W>)?,
            Command::Save => self.save(out)?,
            Command::Finalize => self.finalize(out)?,
            Command::Clear => self.with_editor(out, |editor, out| {
                editor.clear();
                writeln!(out, "Design cleared.")
            })?,
            Command::Order => match self.order_summary() {
                Some(summary) => {
                    writeln!(out, "Order summary")?;
                    writeln!(out, "  Product:   {}", summary.product_name)?;
                    writeln!(out, "  Elements:  {}", summary.design_elements_count)?;
                    writeln!(out, "  Quantity:  {}", summary.quantity)?;
                    writeln!(out, "  Price:     {}", summary.price)?;
                    writeln!(out, "  Shipping:  {}", summary.shipping)?;
                    writeln!(out, "  Total:     {}", summary.total)?;
                    writeln!(out, "Type `confirm` to place the order.")?;
                }
                None => writeln!(out, "No design found. Finalize a design first.")?,
            },
            Command::Confirm => match self.order_summary() {
                Some(summary) => notify(out, &summary.confirm())?,
                None => writeln!(out, "No design found. Finalize a design first.")?,
            },
            Command::Suggest(query) => self.suggest(&query, out).await?,
            Command::Prefs => self.write_preferences(out)?,
            Command::FavColor(color) => {
                match AVAILABLE_COLORS.iter().find(|c| c.eq_ignore_ascii_case(&color)) {
                    Some(color) => {
                        let added = self.profile_draft().toggle_color(color);
                        writeln!(out, "{} {} favorite colors (unsaved).", color, toggled(added))?;
                    }
                    None => writeln!(out, "Choose one of: {}", AVAILABLE_COLORS.join(", "))?,
                }
            }
            Command::FavStyle(style) => {
                match AVAILABLE_STYLES.iter().find(|s| s.eq_ignore_ascii_case(&style)) {
                    Some(style) => {
                        let added = self.profile_draft().toggle_style(style);
                        writeln!(out, "{} {} preferred styles (unsaved).", style, toggled(added))?;
                    }
                    None => writeln!(out, "Choose one of: {}", AVAILABLE_STYLES.join(", "))?,
                }
            }
            Command::PrefsSave => {
                let draft = match self.profile.take() {
                    Some(draft) => draft,
                    None => ProfileDraft::new(self.app.preferences.preferences()),
                };
                let notification = self.app.preferences.save_profile(&draft);
                notify(out, &notification)?;
            }
            Command::PrefsClear => {
                self.profile = None;
                self.app.preferences.clear();
                notify(
                    out,
                    &Notification::error("Preferences Cleared!", "Your saved preferences have been removed."),
                )?;
            }
            Command::Blog => {
                for post in blog::posts() {
                    writeln!(out, "  {}  {} [{}]", post.date, post.title, post.category)?;
                    writeln!(out, "              post {}", post.slug)?;
                }
            }
            Command::Post(slug) => match blog::find_post(&slug) {
                Some(post) => {
                    writeln!(out, "{}", post.page_title())?;
                    writeln!(out, "By {} on {} in {}", post.author, post.date, post.category)?;
                    writeln!(out)?;
                    writeln!(out, "{}", post.summary())?;
                }
                None => writeln!(out, "Post not found. Type `blog` for the list.")?,
            },
            Command::SignUp(form) => {
                let notification = auth::create_account(self.app.identity.as_ref(), &form).await;
                notify(out, &notification)?;
            }
            Command::LogIn(form) => {
                let notification = auth::log_in(self.app.identity.as_ref(), &form).await;
                notify(out, &notification)?;
            }
            Command::Feedback(form) => match feedback::submit(&**self.app.storage(), &form) {
                Ok((_, notification)) => notify(out, &notification)?,
                Err(e) => notify(out, &e.notification())?,
            },
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Run `f` against the open design tool.
    fn with_editor<W, F>(&mut self, out: &mut W, f: F) -> io::Result<()>
    where
        W: Write,
        F: FnOnce(&mut EditorSession<'_, S>, &mut W) -> io::Result<()>,
    {
        let Some(editing) = self.editing.as_mut() else {
            return writeln!(out, "Open a product first with `design <product>`.");
        };
        let mut editor = match EditorSession::resume(
            &mut self.app.designs,
            editing.product_id,
            editing.selected.take(),
        ) {
            Ok(editor) => editor,
            Err(e) => return writeln!(out, "{}", e),
        };

        let result = f(&mut editor, out);
        editing.selected = editor.selection().cloned();
        result
    }

    /// The profile picks being edited, seeded from the saved preferences.
    fn profile_draft(&mut self) -> &mut ProfileDraft {
        let preferences = self.app.preferences.preferences();
        self.profile.get_or_insert_with(|| ProfileDraft::new(preferences))
    }

    fn update_selected<W: Write>(&mut self, update: ElementUpdate, target: &str, out: &mut W) -> io::Result<()> {
        self.with_editor(out, |editor, out| {
            if editor.update_selected(update) {
                writeln!(out, "Updated.")
            } else {
                writeln!(out, "Select {} first.", target)
            }
        })
    }

    fn open_design<W: Write>(&mut self, product_id: &str, out: &mut W) -> io::Result<()> {
        if let Some(editing) = self.editing.take() {
            if editing.product_id == product_id {
                self.editing = Some(editing);
                return writeln!(out, "Already designing {}.", product_id);
            }
            if let Ok(editor) = EditorSession::resume(&mut self.app.designs, editing.product_id, None) {
                editor.close();
            }
        }

        let editor = match EditorSession::open(&mut self.app.designs, product_id) {
            Ok(editor) => editor,
            Err(e) => {
                log::debug!("{}", e);
                return notify(
                    out,
                    &Notification::error("Invalid Product", "This product doesn't exist."),
                );
            }
        };
        let product = editor.product();
        let count = editor.design().len();
        drop(editor);

        self.editing = Some(Editing {
            product_id: product.id,
            selected: None,
        });
        writeln!(
            out,
            "Designing {} ({} element(s)). Design area is {}x{}.",
            product.name, count, product.design_area.width, product.design_area.height
        )
    }

    fn save<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(editing) = self.editing.as_ref() else {
            return writeln!(out, "Open a product first with `design <product>`.");
        };
        match EditorSession::resume(&mut self.app.designs, editing.product_id, None) {
            Ok(editor) => {
                editor.close();
                writeln!(out, "Design saved.")
            }
            Err(e) => writeln!(out, "{}", e),
        }
    }

    /// Save the design, leave the editor and remember it among recent designs.
    fn finalize<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(editing) = self.editing.take() else {
            return writeln!(out, "Open a product first with `design <product>`.");
        };
        let editor = match EditorSession::resume(&mut self.app.designs, editing.product_id, None) {
            Ok(editor) => editor,
            Err(e) => return writeln!(out, "{}", e),
        };
        let has_elements = !editor.design().is_empty();
        let notification = editor.finalize();

        if has_elements {
            if let Some(design) = self.app.designs.last_finalized() {
                self.app.preferences.add_previous_design(design.clone());
            }
        }

        notify(out, &notification)?;
        writeln!(out, "Type `order` to review your order.")
    }

    fn order_summary(&self) -> Option<OrderSummary> {
        OrderSummary::from_finalized(self.app.designs.last_finalized())
    }

    async fn suggest<W: Write>(&self, query: &SuggestionQuery, out: &mut W) -> io::Result<()> {
        if !query.is_empty() {
            writeln!(out, "Generating ideas...")?;
            out.flush()?;
        }

        let recommendations = match self.app.suggester.suggest(query).await {
            Ok(recommendations) => recommendations,
            Err(e) => return notify(out, &e.notification()),
        };

        notify(
            out,
            &Notification::info("Suggestions Ready!", "Here are some AI-powered ideas based on your input."),
        )?;
        for rec in &recommendations {
            writeln!(out, "  {}", rec.title)?;
            writeln!(out, "    {}", rec.description)?;
            writeln!(
                out,
                "    Palette: {} ({})",
                rec.color_palette.name,
                rec.color_palette.colors.join(", ")
            )?;
            let slug = rec.design_slug();
            let product = catalog::products()
                .iter()
                .find(|p| p.id == slug || p.name.eq_ignore_ascii_case(&rec.product_type));
            match product {
                Some(product) => writeln!(out, "    Start designing: design {}", product.id)?,
                None => writeln!(out, "    {} designs are coming soon.", rec.product_type)?,
            }
        }
        Ok(())
    }

    fn write_preferences<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let preferences = self.app.preferences.preferences();
        writeln!(out, "Favorite colors:   {}", list_or_none(&preferences.favorite_colors))?;
        writeln!(out, "Preferred styles:  {}", list_or_none(&preferences.preferred_styles))?;
        writeln!(out, "Recent designs:    {}", preferences.previous_designs.len())?;
        for design in &preferences.previous_designs {
            let product = design
                .product_id
                .as_ref()
                .map_or("unknown product", |id| id.as_str());
            writeln!(out, "  {} ({} element(s))", product, design.len())?;
        }
        if let Some(draft) = self.profile.as_ref().filter(|d| d.differs_from(preferences)) {
            writeln!(out, "Unsaved picks:")?;
            writeln!(out, "  Favorite colors:   {}", list_or_none(&draft.favorite_colors))?;
            writeln!(out, "  Preferred styles:  {}", list_or_none(&draft.preferred_styles))?;
            writeln!(out, "Type `prefs-save` to keep them.")?;
        }
        Ok(())
    }
}

fn write_layers<S: Storage, W: Write>(editor: &mut EditorSession<'_, S>, out: &mut W) -> io::Result<()> {
    let design = editor.design();
    if design.is_empty() {
        return writeln!(out, "No elements yet.");
    }
    let area = editor.product().design_area;
    let selected = editor.selection();

    for (i, element) in design.elements.iter().enumerate() {
        let marker = if Some(element.id()) == selected { '*' } else { ' ' };
        let (x, y) = element.position();
        let detail = match element {
            DesignElement::Text(text) => {
                format!("\"{}\" {} {}px", text.content, text.color, text.font_size)
            }
            DesignElement::Image(image) => format!("{} {}x{}", image.src, image.width, image.height),
        };
        let placement = if area.contains(x, y) {
            let (mx, my) = area.to_mockup(x, y);
            format!("mock-up ({}, {})", mx, my)
        } else {
            "outside design area".to_string()
        };
        writeln!(
            out,
            "{}{:>2}. [{}] {} at ({}, {}) {} {}",
            marker,
            i + 1,
            element.kind_name(),
            element.id(),
            x,
            y,
            placement,
            detail
        )?;
    }
    Ok(())
}

fn notify<W: Write>(out: &mut W, notification: &Notification) -> io::Result<()> {
    let marker = if notification.is_error() { '!' } else { '*' };
    writeln!(out, "{} {}", marker, notification)
}

fn toggled(added: bool) -> &'static str {
    if added { "added to" } else { "removed from" }
}

fn list_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creations_core::storage::MemoryStorage;
    use creations_core::{DesignStore, MemoryIdentityService, ProductId, Suggester};
    use std::sync::Arc;
    use std::time::Duration;

    fn shell() -> Shell<MemoryStorage> {
        Shell::new(App::new(
            Arc::new(MemoryStorage::new()),
            Suggester::new(Duration::ZERO),
            Box::new(MemoryIdentityService::new()),
        ))
    }

    async fn run_script(shell: &mut Shell<MemoryStorage>, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_design_to_order() {
        let mut shell = shell();
        let output = run_script(
            &mut shell,
            "design tshirt\ntext Hello\nlayers\nfinalize\norder\nconfirm\nquit\n",
        )
        .await;

        assert!(output.contains("Designing T-Shirt (0 element(s))"));
        assert!(output.contains("[text]"));
        assert!(output.contains("\"Hello\" #000000 24px"));
        assert!(output.contains("* Design Saved!"));
        assert!(output.contains("Total:     $30.99"));
        assert!(output.contains("* Order Placed!"));
        assert!(output.ends_with("Goodbye!\n"));

        let app = shell.app();
        assert_eq!(app.designs().saved(&ProductId::from("tshirt")).map(|d| d.len()), Some(1));
        assert_eq!(app.preferences().preferences().previous_designs.len(), 1);
    }

    #[tokio::test]
    async fn test_editor_commands_need_a_design() {
        let mut shell = shell();
        let output = run_script(&mut shell, "text Hi\nfinalize\norder\n").await;

        assert_eq!(output.matches("Open a product first").count(), 2);
        assert!(output.contains("No design found"));
    }

    #[tokio::test]
    async fn test_unsaved_edits_survive_between_commands() {
        let mut shell = shell();
        let output = run_script(
            &mut shell,
            "design mug\nimage cat.png\nresize 500 500\nmove 10 20\nlayers\n",
        )
        .await;

        assert!(output.contains("cat.png 300x200"));
        assert!(output.contains("at (10, 20) mock-up (110, 170)"));
    }

    #[tokio::test]
    async fn test_switching_products_saves_previous() {
        let mut shell = shell();
        let mut out = Vec::new();
        for line in ["design tshirt", "text A", "design mug"] {
            let command = Command::parse(line).unwrap().unwrap();
            shell.execute(command, &mut out).await.unwrap();
        }

        let designs = shell.app().designs();
        assert_eq!(designs.saved(&ProductId::from("tshirt")).map(|d| d.len()), Some(1));
        assert!(designs.current().targets(&ProductId::from("mug")));
        assert!(designs.last_finalized().is_some());
    }

    #[tokio::test]
    async fn test_exit_saves_open_design() {
        let mut shell = shell();
        run_script(&mut shell, "design hat\ntext Cap\n").await;

        let reopened = DesignStore::open(Arc::clone(shell.app().storage()));
        assert_eq!(reopened.saved(&ProductId::from("hat")).map(|d| d.len()), Some(1));
    }

    #[tokio::test]
    async fn test_selection_rules() {
        let mut shell = shell();
        let output = run_script(
            &mut shell,
            "design bag\nimage logo.png\nfont 30\nselect nope\nremove\nremove\n",
        )
        .await;

        assert!(output.contains("Select a text element first."));
        assert!(output.contains("No element nope in this design."));
        assert!(output.contains("Removed."));
        assert!(output.contains("Select an element first."));
    }

    #[tokio::test]
    async fn test_invalid_input() {
        let mut shell = shell();
        let output = run_script(
            &mut shell,
            "design spaceship\ndesign tshirt\ntext Hi\ncolor-text red\nfly\n",
        )
        .await;

        assert!(output.contains("! Invalid Product"));
        assert!(output.contains("! Invalid Value"));
        assert!(output.contains("Unknown command `fly`"));
    }

    #[tokio::test]
    async fn test_suggest() {
        let mut shell = shell();
        let output = run_script(&mut shell, "suggest\nsuggest cats | Mug | Vintage\n").await;

        assert!(output.contains("! Input Needed"));
        assert!(output.contains("Inspired Mug Idea #1"));
        assert!(output.contains("Start designing: design mug"));
    }

    #[tokio::test]
    async fn test_preferences() {
        let mut shell = shell();
        let output = run_script(
            &mut shell,
            "fav-color red\nfav-style vintage\nfav-color Teal\nprefs-save\nprefs\nfav-color Red\n",
        )
        .await;

        assert!(output.contains("Red added to favorite colors (unsaved)."));
        assert!(output.contains("Vintage added to preferred styles (unsaved)."));
        assert!(output.contains("Choose one of: Red, Blue"));
        assert!(output.contains("* Preferences Saved!"));
        assert!(output.contains("Favorite colors:   Red"));
        assert!(output.contains("Red removed from favorite colors (unsaved)."));

        let output = run_script(&mut shell, "prefs-clear\nprefs\n").await;
        assert!(output.contains("! Preferences Cleared!"));
        assert!(output.contains("Preferred styles:  none"));
        assert!(!output.contains("Unsaved picks:"));
    }

    #[tokio::test]
    async fn test_profile_picks_kept_only_after_prefs_save() {
        let mut shell = shell();
        let mut out = Vec::new();
        for line in ["fav-color pink", "fav-style sporty", "fav-style casual", "fav-style sporty", "prefs"] {
            let command = Command::parse(line).unwrap().unwrap();
            shell.execute(command, &mut out).await.unwrap();
        }

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Favorite colors:   none"));
        assert!(output.contains("  Favorite colors:   Pink"));
        assert!(output.contains("  Preferred styles:  Casual"));
        assert!(shell.app().preferences().preferences().favorite_colors.is_empty());
        assert!(shell.app().storage().get("userPreferences").unwrap().is_none());

        let mut out = Vec::new();
        shell.execute(Command::PrefsSave, &mut out).await.unwrap();

        let preferences = shell.app().preferences().preferences();
        assert_eq!(preferences.favorite_colors, vec!["Pink"]);
        assert_eq!(preferences.preferred_styles, vec!["Casual"]);
        let stored = shell.app().storage().get("userPreferences").unwrap().unwrap();
        assert!(stored.contains(r#""favoriteColors":["Pink"]"#));
        assert!(stored.contains(r#""preferredStyles":["Casual"]"#));
    }

    #[tokio::test]
    async fn test_edit_selected_elements() {
        let mut shell = shell();
        let output = run_script(
            &mut shell,
            "design mug\ntext Hello\nedit-text Happy birthday\nimage-src dog.png\n\
             image cat.png\nedit-text Hi\nimage-src https://example.com/dog.png\nlayers\n",
        )
        .await;

        assert_eq!(output.matches("Updated.").count(), 2);
        assert!(output.contains("Select an image element first."));
        assert!(output.contains("Select a text element first."));
        assert!(output.contains("\"Happy birthday\" #000000 24px"));
        assert!(output.contains("https://example.com/dog.png 100x100"));
        assert!(!output.contains("cat.png"));

        let mut out = Vec::new();
        shell.execute(Command::EditText("  ".to_string()), &mut out).await.unwrap();
        shell.execute(Command::ImageSrc(" ".to_string()), &mut out).await.unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("! Text Required"));
        assert!(output.contains("! Image URL Required"));
    }

    #[tokio::test]
    async fn test_accounts() {
        let mut shell = shell();
        let output = run_script(
            &mut shell,
            "signup Jo | jo@example.com | secret1 | secret2 | 1990-01-01\n\
             signup Jo | jo@example.com | secret1 | secret1 | 1990-01-01\n\
             login jo@example.com secret1\n\
             login jo@example.com wrong\n",
        )
        .await;

        assert!(output.contains("! Passwords Mismatch"));
        assert!(output.contains("* Account Created!"));
        assert!(output.contains("* Login Successful!"));
        assert!(output.contains("! Login Failed: Invalid login credentials"));
    }

    #[tokio::test]
    async fn test_feedback() {
        let mut shell = shell();
        let output = run_script(
            &mut shell,
            "feedback product_quality | 0 | Nice\nfeedback general | 0 | Nice site\n",
        )
        .await;

        assert!(output.contains("! Rating Required"));
        assert!(output.contains("* Feedback Sent!"));
        assert!(shell.app().storage().get("userFeedback").unwrap().is_some());
    }

    #[tokio::test]
    async fn test_blog() {
        let mut shell = shell();
        let output = run_script(
            &mut shell,
            "blog\npost why-custom-mugs-make-the-perfect-corporate-gift\npost nope\n",
        )
        .await;

        assert!(output.contains("2025-05-15  Top 5 Personalized Gift Ideas for the Holidays [Gift Ideas]"));
        assert!(output.contains("By Marketer Mike on 2025-05-05 in Business"));
        assert!(output.contains("Post not found."));
    }
}
