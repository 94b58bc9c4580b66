//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::scene::{Scene, SceneAction};
use crate::style::{GameStyle, indented_block, normal_block};

const ICON_SUCCESS: &str = "\u{2611}"; // ✔
const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_TRIGGER: &str = "⚡︎"; // U+26A1 U+FE0E
const ICON_ENGINE: &str = "⚙";
const ICON_USE: &str = "✋";

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            view_item: item,
        });
    }

    /// Iterate over the queued items in push order.
    pub fn queued(&self) -> impl Iterator<Item = &ViewItem> {
        self.items.iter().map(|entry| &entry.view_item)
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        let has = |section: Section| self.items.iter().any(|entry| entry.section == section);

        if let Some(msg) = self.items.iter().find_map(|i| match &i.view_item {
            ViewItem::TransitionMessage(msg) => Some(msg),
            _ => None,
        }) {
            println!("\n{}", fill(msg.as_str(), normal_block()).transition_style());
        }

        if has(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            self.direct_results();
        }
        if has(Section::WorldResponse) {
            println!("{:.>width$}\n", "responses".section_style(), width = self.width);
            self.triggered_event();
        }
        if has(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            self.scene();
        }
        if has(Section::System) {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            self.show_help();
            self.engine_message();
            self.quit_summary();
        }

        // clear the buffer for the next turn
        self.items.clear();

        // create a little space before the next prompt
        println!();
    }

    fn direct_results(&self) {
        self.item_used();
        self.inventory();
        self.action_success();
        self.action_failure();
        self.errors();
        println!();
    }

    fn scene(&self) {
        let Some(scene) = self.items.iter().rev().find_map(|entry| match &entry.view_item {
            ViewItem::Scene(scene) => Some(scene),
            _ => None,
        }) else {
            return;
        };

        println!("{}", scene.title.location_titlebar_style());
        if scene.ended {
            println!("{}", fill(&scene.description, normal_block()).ending_style());
        } else if scene.dark {
            println!("{}", fill(&scene.description, normal_block()).dark_style());
        } else {
            println!("{}", fill(&scene.description, normal_block()).description_style());
        }
        println!();

        for (idx, choice) in scene.choices.iter().enumerate() {
            let number = format!("{:>3})", idx + 1);
            if choice.enabled {
                let text = match choice.action {
                    SceneAction::Choice(_) => choice.text.choice_style(),
                    SceneAction::Back | SceneAction::Restart => choice.text.italic(),
                };
                println!("{number} {text}");
            } else {
                let needs = choice.needs.as_deref().unwrap_or("something");
                println!(
                    "{number} {} {}",
                    choice.text.disabled_style(),
                    format!("(needs {needs})").denied_style()
                );
            }
        }
        if scene.ended && scene.choices.is_empty() {
            println!("{}", "    The story is over. Type \"quit\" to leave.".dimmed());
        }
        println!();

        let inventory = if scene.inventory.is_empty() {
            "Empty".italic().dimmed().to_string()
        } else {
            scene.inventory.join(", ").item_style().to_string()
        };
        println!("{} {inventory}", "Inventory:".subheading_style());

        if !scene.item_actions.is_empty() {
            let actions: Vec<String> = scene
                .item_actions
                .iter()
                .enumerate()
                .map(|(idx, action)| {
                    let label = format!("[u{}] {}", idx + 1, action.name);
                    if action.active {
                        format!("{} (lit)", label.active_item_style())
                    } else {
                        label.item_style().to_string()
                    }
                })
                .collect();
            println!("{} {}", "Use:".subheading_style(), actions.join("  "));
        }
    }

    fn item_used(&self) {
        for entry in &self.items {
            if let ViewItem::ItemUsed { item_name, message } = &entry.view_item {
                let formatted = format!("{ICON_USE:<4}{}: {message}", item_name.item_style());
                println!("{}", fill(formatted.as_str(), normal_block()));
            }
        }
    }

    fn inventory(&self) {
        if let Some(entry) = self
            .items
            .iter()
            .find(|i| matches!(i.view_item, ViewItem::Inventory(..)))
            && let ViewItem::Inventory(item_lines) = &entry.view_item
        {
            println!("{}:", "Inventory".subheading_style());
            if item_lines.is_empty() {
                println!("   {}", "You have... nothing at all.".italic().dimmed());
            } else {
                for line in item_lines {
                    let name = if line.active {
                        line.item_name.active_item_style()
                    } else {
                        line.item_name.item_style()
                    };
                    println!("   {name}");
                    println!("{}", fill(&line.description, indented_block()).dimmed());
                }
            }
        }
    }

    fn action_success(&self) {
        for msg in self.items.iter().filter_map(|i| match &i.view_item {
            ViewItem::ActionSuccess(msg) => Some(msg),
            _ => None,
        }) {
            println!(
                "{}",
                fill(
                    format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(),
                    normal_block()
                )
            );
        }
    }

    fn action_failure(&self) {
        for msg in self.items.iter().filter_map(|i| match &i.view_item {
            ViewItem::ActionFailure(msg) => Some(msg),
            _ => None,
        }) {
            println!(
                "{}",
                fill(
                    format!("{} {}", ICON_FAILURE.bright_red(), msg.denied_style()).as_str(),
                    normal_block()
                )
            );
        }
    }

    fn errors(&self) {
        for msg in self.items.iter().filter_map(|i| match &i.view_item {
            ViewItem::Error(msg) => Some(msg),
            _ => None,
        }) {
            println!(
                "{}",
                fill(
                    format!("{:<4}{}", ICON_ERROR.error_icon_style(), msg).as_str(),
                    normal_block()
                )
            );
        }
    }

    fn triggered_event(&self) {
        for msg in self.items.iter().filter_map(|i| match &i.view_item {
            ViewItem::TriggeredEvent(msg) => Some(msg),
            _ => None,
        }) {
            let formatted = format!("{:<4}{}", ICON_TRIGGER.trig_icon_style(), msg.triggered_style());
            println!("{}", fill(formatted.as_str(), normal_block()));
            println!();
        }
    }

    fn engine_message(&self) {
        for msg in self.items.iter().filter(|i| i.view_item.is_engine_message()) {
            println!(
                "{}",
                fill(
                    format!("{ICON_ENGINE:<4}{}", msg.view_item.clone().unwrap_engine_message()).as_str(),
                    normal_block()
                )
            );
        }
    }

    fn show_help(&self) {
        if let Some(entry) = self
            .items
            .iter()
            .find(|item| matches!(&item.view_item, ViewItem::Help { .. }))
            && let ViewItem::Help { basic_text, commands } = &entry.view_item
        {
            println!("{}", fill(basic_text, normal_block()).italic().cyan());
            println!();

            // Partition commands into normal vs DEV (':'-prefixed)
            let (dev_cmds, normal_cmds): (Vec<_>, Vec<_>) =
                commands.iter().cloned().partition(|c| c.command.starts_with(':'));

            println!("{}", "Commands:".bold().yellow());
            println!();
            for command in &normal_cmds {
                let formatted_line = format!("{} - {}", command.command.bold().green(), command.description.italic());
                println!("{}", fill(&formatted_line, normal_block()));
            }

            if crate::DEV_MODE && !dev_cmds.is_empty() {
                println!();
                println!("{}", "Developer Commands (DEV_MODE):".bold().yellow());
                println!();
                for command in &dev_cmds {
                    let formatted_line =
                        format!("{} - {}", command.command.bold().green(), command.description.italic());
                    println!("{}", fill(&formatted_line, normal_block()));
                }
            }
            println!();
        }
    }

    fn quit_summary(&self) {
        if let Some(entry) = self
            .items
            .iter()
            .find(|entry| matches!(entry.view_item, ViewItem::QuitSummary { .. }))
            && let ViewItem::QuitSummary {
                title,
                location,
                items_found,
                max_items,
                steps,
            } = &entry.view_item
        {
            println!("{:^width$}", title.as_str().black().on_yellow(), width = self.width);
            println!("{:12} {}", "Last seen:", location.bright_cyan());
            println!("{:12} {}/{}", "Items found:", items_found, max_items);
            println!("{:12} {}", "Steps taken:", steps);
        }
    }
}

/// Subsections of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    /// Transitional text between locations.
    Transition,
    /// The current scene: description, choices, inventory.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// Follow-up reactions from the world.
    WorldResponse,
    /// Meta/game-system feedback (help, quit, etc.).
    System,
}

/// Wrapper for a `ViewItem` recording its section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub view_item: ViewItem,
}

/// Row data for the inventory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLine {
    pub item_name: String,
    pub description: String,
    pub active: bool,
}

/// One command and what it does, for the help screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    EngineMessage(String),
    Error(String),
    Help {
        basic_text: String,
        commands: Vec<HelpCommand>,
    },
    Inventory(Vec<InventoryLine>),
    ItemUsed {
        item_name: String,
        message: String,
    },
    QuitSummary {
        title: String,
        location: String,
        items_found: usize,
        max_items: usize,
        steps: usize,
    },
    Scene(Scene),
    TransitionMessage(String),
    TriggeredEvent(String),
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::Scene(_) => Section::Environment,
            ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::ItemUsed { .. }
            | ViewItem::Inventory(_) => Section::DirectResult,
            ViewItem::TriggeredEvent(_) => Section::WorldResponse,
            ViewItem::QuitSummary { .. } | ViewItem::EngineMessage(_) | ViewItem::Help { .. } => Section::System,
            ViewItem::TransitionMessage(_) => Section::Transition,
        }
    }
}
