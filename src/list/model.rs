//! The list as a bubbletea-rs component.
//!
//! [`Model`] owns a collection and a [`ListState`] and maps key presses from
//! its [`ListKeyMap`] to list operations. The screen it renders has the
//! layout the rest of the crate assumes:
//!
//! ```text
//! row 0             title and key help
//! row 1             (blank)
//! row 2             column header
//! rows 3..h-2       list window
//! row h-2           (blank)
//! row h-1           status line
//! ```

use super::canvas::StringCanvas;
use super::config::{ColumnLayout, ListConfig};
use super::fields::FieldTable;
use super::keys::ListKeyMap;
use super::state::ListState;
use super::style::ListStyles;
use super::types::{Collection, Direction};
use crate::key::{self, KeyMap};
use crate::text::Sanitizer;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

/// A scrollable, multi-select list over a collection `C`.
///
/// # Examples
///
/// ```
/// use rolodex_list::list::{Contact, ContactBook, Model};
///
/// let book = ContactBook::from(vec![
///     Contact::new("Ada Lovelace", "ada@example.org"),
///     Contact::new("Alan Turing", "alan@example.org"),
/// ]);
/// let list = Model::new(book, 80, 24);
/// assert_eq!(list.state().window_height(), 19);
/// assert_eq!(list.state().current_index(), Some(0));
/// ```
pub struct Model<C: Collection> {
    collection: C,
    state: ListState,
    /// Key bindings.
    pub keymap: ListKeyMap,
    /// Styles passed to the canvas.
    pub styles: ListStyles,
    title: String,
    width: u16,
    height: u16,
    needs_resync: bool,
}

impl<C: Collection> Model<C> {
    /// Creates a list with default options for a `width` x `height`
    /// terminal.
    pub fn new(collection: C, width: u16, height: u16) -> Self {
        Self::with_config(collection, ListConfig::default(), FieldTable::standard(), width, height)
    }

    /// Creates a list with the given options and field table.
    ///
    /// The layout width in `config` is replaced by `width`.
    pub fn with_config(
        collection: C,
        mut config: ListConfig,
        fields: &FieldTable,
        width: u16,
        height: u16,
    ) -> Self {
        config.layout.width = usize::from(width);
        let mut state = ListState::init(ColumnLayout::list_lines(height), config, fields);
        state.resize_selection(collection.count());
        Self {
            collection,
            state,
            keymap: ListKeyMap::default(),
            styles: ListStyles::default(),
            title: "rolodex".to_string(),
            width,
            height,
            needs_resync: false,
        }
    }

    /// Sets the title shown on the first row (builder pattern).
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the styles (builder pattern).
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the sanitizer applied to drawn fields (builder pattern).
    pub fn with_sanitizer(mut self, sanitizer: Sanitizer) -> Self {
        self.state = self.state.with_sanitizer(sanitizer);
        self
    }

    /// Sets the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: ListKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// The records.
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Mutable access to the records.
    ///
    /// The selection is cleared and resized on the next update, so inserts
    /// and removals made through this reference are safe.
    pub fn collection_mut(&mut self) -> &mut C {
        self.needs_resync = true;
        &mut self.collection
    }

    /// The list state.
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Terminal size as `(width, height)`.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Adapts the layout to a new terminal size.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.state.config.layout.width = usize::from(width);
        self.state
            .set_window_height(ColumnLayout::list_lines(height), &self.collection);
    }

    /// Applies pending collection changes to the selection.
    pub fn resync(&mut self) {
        if self.needs_resync {
            self.state.resize_selection(self.collection.count());
            self.needs_resync = false;
        }
    }

    fn title_line(&self) -> String {
        let help = key::help_line(&self.keymap.short_help(), " • ");
        format!("{}  {}", self.title, help)
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let km = &self.keymap;
        if km.quit.matches(key_msg) || km.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        if km.cursor_up.matches(key_msg) {
            self.state.scroll_up(&self.collection);
        } else if km.cursor_down.matches(key_msg) {
            self.state.scroll_down(&self.collection);
        } else if km.page_up.matches(key_msg) {
            self.state.page_up(&self.collection);
        } else if km.page_down.matches(key_msg) {
            self.state.page_down(&self.collection);
        } else if km.go_to_start.matches(key_msg) {
            self.state.goto_home(&self.collection);
        } else if km.go_to_end.matches(key_msg) {
            self.state.goto_end(&self.collection);
        } else if km.move_up.matches(key_msg) {
            self.state.move_item(&mut self.collection, Direction::Up);
        } else if km.move_down.matches(key_msg) {
            self.state.move_item(&mut self.collection, Direction::Down);
        } else if km.toggle_select.matches(key_msg) {
            self.state.toggle_current();
        } else if km.select_all.matches(key_msg) {
            self.state.select_all();
        } else if km.select_none.matches(key_msg) {
            self.state.clear_all();
        } else if km.invert_selection.matches(key_msg) {
            self.state.invert_selection();
        } else if km.duplicate.matches(key_msg) {
            if let Err(err) = self.state.duplicate_current(&mut self.collection) {
                tracing::debug!(error = %err, "duplicate ignored");
            }
        }
        None
    }
}

impl<C> BubbleTeaModel for Model<C>
where
    C: Collection + Default + Send + Sync + 'static,
{
    /// Creates an empty list for an 80x24 terminal.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(C::default(), 80, 24), None)
    }

    /// Handles key presses and terminal resizes.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.resync();
        if let Some(size) = msg.downcast_ref::<bubbletea_rs::WindowSizeMsg>() {
            self.set_size(size.width, size.height);
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        self.handle_key(key_msg)
    }

    /// Renders the title, header, list window and status line.
    ///
    /// Changes made through [`Model::collection_mut`] are applied to a copy
    /// of the state for drawing when no update has run since.
    fn view(&self) -> String {
        let resynced;
        let state = if self.needs_resync {
            let mut copy = self.state.clone();
            copy.resize_selection(self.collection.count());
            resynced = copy;
            &resynced
        } else {
            &self.state
        };
        let mut canvas = StringCanvas::new(usize::from(self.width), state.window_height())
            .with_styles(self.styles.clone());
        let drawn = state
            .render_header(&mut canvas)
            .and_then(|_| state.draw(&self.collection, &mut canvas));
        if let Err(err) = drawn {
            tracing::error!(error = %err, "failed to draw list");
        }
        format!("{}\n\n{}", self.title_line(), canvas.frame())
    }
}
