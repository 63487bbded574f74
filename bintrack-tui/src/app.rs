use bintrack_core::{
    Bin, BinId, BinStore, BinUpdate, MAX_LOCATION_LEN, MAX_TYPE_LEN, MergeOutcome, StoreError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Menu,
    Form,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    PopulateSample,
    AddBin,
    DisplayAll,
    UpdateBin,
    DeleteBin,
    SearchByType,
    SearchByLocation,
    FillAlert,
    SortByFillLevel,
    SortByType,
    ToggleActive,
    PopulateZoneSample,
    MergeZones,
    SwapDemo,
    BitwiseDemo,
    Exit,
}

impl MenuAction {
    /// Menu entries in display order; the list index doubles as the menu number.
    pub(crate) const ALL: [Self; 16] = [
        Self::PopulateSample,
        Self::AddBin,
        Self::DisplayAll,
        Self::UpdateBin,
        Self::DeleteBin,
        Self::SearchByType,
        Self::SearchByLocation,
        Self::FillAlert,
        Self::SortByFillLevel,
        Self::SortByType,
        Self::ToggleActive,
        Self::PopulateZoneSample,
        Self::MergeZones,
        Self::SwapDemo,
        Self::BitwiseDemo,
        Self::Exit,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::PopulateSample => "Populate Sample Bins",
            Self::AddBin => "Add Bin",
            Self::DisplayAll => "Display All Bins",
            Self::UpdateBin => "Update Bin",
            Self::DeleteBin => "Delete Bin",
            Self::SearchByType => "Search by Type",
            Self::SearchByLocation => "Search by Location",
            Self::FillAlert => "Low Capacity Alert",
            Self::SortByFillLevel => "Sort by Fill Level",
            Self::SortByType => "Sort by Type",
            Self::ToggleActive => "Toggle Active Status",
            Self::PopulateZoneSample => "Add Zone Sample Data",
            Self::MergeZones => "Merge Zone into Main",
            Self::SwapDemo => "Swap Without Third Variable Demo",
            Self::BitwiseDemo => "Bitwise AND/OR/XOR Demo",
            Self::Exit => "Exit",
        }
    }

    /// Input fields collected before the action runs. The update form grows a
    /// third field once the mode choice is known.
    fn initial_fields(self) -> Vec<Field> {
        match self {
            Self::AddBin => vec![
                Field::int("Enter Bin ID", 1, 10_000),
                Field::text("Enter Bin Type (Plastic/Organic/Glass/Paper)", MAX_TYPE_LEN),
                Field::text("Enter Location", MAX_LOCATION_LEN),
                Field::int("Enter Capacity (liters)", 1, 10_000),
                Field::int("Enter Current Fill Percentage", 0, 100),
            ],
            Self::UpdateBin => vec![
                Field::int("Enter Bin ID to update", 1, 10_000),
                Field::int("1 Update Fill Level / 2 Update Location / 3 Toggle Clean Flag", 1, 3),
            ],
            Self::DeleteBin => vec![Field::int("Enter Bin ID to delete", 1, 10_000)],
            Self::SearchByType => vec![Field::text("Enter bin type to search", MAX_TYPE_LEN)],
            Self::SearchByLocation => {
                vec![Field::text("Enter location to search", MAX_LOCATION_LEN)]
            }
            Self::FillAlert => vec![Field::int(
                "Enter fill percentage alert threshold (e.g. 80)",
                0,
                100,
            )],
            Self::ToggleActive => {
                vec![Field::int("Enter Bin ID to toggle active status", 1, 10_000)]
            }
            Self::SwapDemo => vec![
                Field::int("Enter a", -1_000, 1_000),
                Field::int("Enter b", -1_000, 1_000),
            ],
            Self::BitwiseDemo => vec![
                Field::int("Enter first integer", -1_000_000, 1_000_000),
                Field::int("Enter second integer", -1_000_000, 1_000_000),
            ],
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum FieldKind {
    /// Integer input, clamped into `min..=max` on confirmation.
    Int { min: i64, max: i64 },
    /// Free text input, capped at `max_len` characters while typing.
    Text { max_len: usize },
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    pub label: &'static str,
    pub kind: FieldKind,
}

impl Field {
    fn int(label: &'static str, min: i64, max: i64) -> Self {
        Self {
            label,
            kind: FieldKind::Int { min, max },
        }
    }

    fn text(label: &'static str, max_len: usize) -> Self {
        Self {
            label,
            kind: FieldKind::Text { max_len },
        }
    }
}

pub(crate) struct Form {
    pub action: MenuAction,
    pub fields: Vec<Field>,
    pub values: Vec<String>,
    pub input: String,
}

impl Form {
    /// The field currently being edited, if any remain.
    pub(crate) fn current_field(&self) -> Option<&Field> {
        self.fields.get(self.values.len())
    }
}

/// Result of the last executed action, rendered by the output screen.
pub(crate) enum Output {
    Messages(Vec<String>),
    Table(Vec<Bin>),
    Details(Vec<Bin>),
}

pub(crate) struct App {
    pub store: BinStore,

    pub screen: Screen,
    pub menu_index: usize,
    pub form: Option<Form>,

    pub output_title: String,
    pub output: Output,

    pub status: Option<String>,
}

impl App {
    pub(crate) fn new(store: BinStore) -> Self {
        Self {
            store,
            screen: Screen::Menu,
            menu_index: 0,
            form: None,
            output_title: String::new(),
            output: Output::Messages(Vec::new()),
            status: None,
        }
    }

    /// Open the input form for an action, or execute it right away when it
    /// takes no input.
    pub(crate) fn select(&mut self, action: MenuAction) {
        let fields = action.initial_fields();
        if fields.is_empty() {
            self.execute(action);
            return;
        }
        self.form = Some(Form {
            action,
            fields,
            values: Vec::new(),
            input: String::new(),
        });
        self.screen = Screen::Form;
        self.status = None;
    }

    /// Append a character to the current form field, honoring its kind.
    pub(crate) fn push_input(&mut self, character: char) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let Some(field) = form.current_field().copied() else {
            return;
        };
        match field.kind {
            FieldKind::Int { .. } => {
                let is_sign = character == '-' && form.input.is_empty();
                if (character.is_ascii_digit() || is_sign) && form.input.chars().count() < 8 {
                    form.input.push(character);
                }
            }
            FieldKind::Text { max_len } => {
                if !character.is_control() && form.input.chars().count() < max_len {
                    form.input.push(character);
                }
            }
        }
    }

    pub(crate) fn pop_input(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.input.pop();
        }
    }

    /// Validate and confirm the current form field.
    ///
    /// Returns the form's action once every field has a value; integer input
    /// that does not parse keeps the form on the same field with a retry
    /// message, matching the original prompt loop.
    pub(crate) fn commit_field(&mut self) -> Option<MenuAction> {
        let form = self.form.as_mut()?;
        let field = *form.current_field()?;
        match field.kind {
            FieldKind::Int { min, max } => {
                let Ok(parsed) = form.input.trim().parse::<i64>() else {
                    self.status = Some("Invalid input. Enter an integer.".to_owned());
                    form.input.clear();
                    return None;
                };
                form.values.push(parsed.clamp(min, max).to_string());
            }
            FieldKind::Text { .. } => {
                let trimmed = form.input.trim();
                if trimmed.is_empty() {
                    self.status = Some("Input cannot be empty.".to_owned());
                    return None;
                }
                form.values.push(trimmed.to_owned());
            }
        }
        form.input.clear();
        self.status = None;

        // The update form only knows its value field after the mode choice.
        if form.action == MenuAction::UpdateBin && form.values.len() == 2 {
            match form.values.get(1).map(String::as_str) {
                Some("1") => form
                    .fields
                    .push(Field::int("Enter new fill percentage", 0, 100)),
                Some("2") => form
                    .fields
                    .push(Field::text("Enter new location", MAX_LOCATION_LEN)),
                _ => {}
            }
        }

        (form.values.len() == form.fields.len()).then_some(form.action)
    }

    pub(crate) fn cancel_form(&mut self) {
        self.form = None;
        self.status = None;
        self.screen = Screen::Menu;
    }

    pub(crate) fn close_output(&mut self) {
        self.screen = Screen::Menu;
    }

    /// Run a store operation or demo routine and stage its result for the
    /// output screen.
    pub(crate) fn execute(&mut self, action: MenuAction) {
        let values = self.form.take().map(|form| form.values).unwrap_or_default();
        let title = action.label();
        match action {
            MenuAction::PopulateSample => {
                let line = if self.store.populate_sample() {
                    "Sample bin data added successfully."
                } else {
                    "Bins already exist. Skipping."
                };
                self.show_messages(title, vec![line.to_owned()]);
            }
            MenuAction::AddBin => {
                let bin = Bin::new(
                    BinId(u32_arg(&values, 0)),
                    text_arg(&values, 1),
                    text_arg(&values, 2),
                    u32_arg(&values, 3),
                    u8_arg(&values, 4),
                );
                match self.store.add(bin) {
                    Ok(()) => {
                        let line =
                            format!("Bin added successfully. Total bins: {}", self.store.len());
                        self.show_messages(title, vec![line]);
                    }
                    Err(error) => self.show_messages(title, vec![error.to_string()]),
                }
            }
            MenuAction::DisplayAll => {
                if self.store.is_empty() {
                    self.show_messages(title, vec!["No bins available.".to_owned()]);
                } else {
                    self.show_table(title, self.store.bins().to_vec());
                }
            }
            MenuAction::UpdateBin => {
                let id = BinId(u32_arg(&values, 0));
                let (update, note) = match int_arg(&values, 1) {
                    1 => (BinUpdate::FillLevel(u8_arg(&values, 2)), None),
                    2 => (BinUpdate::Location(text_arg(&values, 2)), None),
                    _ => (BinUpdate::ToggleCleaning, Some("Toggled cleaning status.")),
                };
                match self.store.update(id, update) {
                    Ok(()) => {
                        let mut lines = Vec::new();
                        if let Some(note) = note {
                            lines.push(note.to_owned());
                        }
                        lines.push("Update successful.".to_owned());
                        self.show_messages(title, lines);
                    }
                    Err(StoreError::EmptyCollection) => {
                        self.show_messages(title, vec!["No bins to update.".to_owned()]);
                    }
                    Err(_) => self.show_messages(title, vec!["Bin ID not found.".to_owned()]),
                }
            }
            MenuAction::DeleteBin => {
                match self.store.remove(BinId(u32_arg(&values, 0))) {
                    Ok(_) => {
                        self.show_messages(title, vec!["Bin deleted successfully.".to_owned()]);
                    }
                    Err(StoreError::EmptyCollection) => {
                        self.show_messages(title, vec!["No bins to delete.".to_owned()]);
                    }
                    Err(_) => self.show_messages(title, vec!["Bin not found.".to_owned()]),
                }
            }
            MenuAction::SearchByType => {
                let query = text_arg(&values, 0);
                if self.store.is_empty() {
                    self.show_messages(title, vec!["Database empty.".to_owned()]);
                    return;
                }
                let hits: Vec<Bin> = self
                    .store
                    .search_by_type(&query)
                    .into_iter()
                    .cloned()
                    .collect();
                if hits.is_empty() {
                    let line = format!("No bins of type '{query}' found.");
                    self.show_messages(title, vec![line]);
                } else {
                    self.show_details(title, hits);
                }
            }
            MenuAction::SearchByLocation => {
                let query = text_arg(&values, 0);
                if self.store.is_empty() {
                    self.show_messages(title, vec!["Database empty.".to_owned()]);
                    return;
                }
                let hits: Vec<Bin> = self
                    .store
                    .search_by_location(&query)
                    .into_iter()
                    .cloned()
                    .collect();
                if hits.is_empty() {
                    let line = format!("No bins found in location '{query}'.");
                    self.show_messages(title, vec![line]);
                } else {
                    self.show_details(title, hits);
                }
            }
            MenuAction::FillAlert => {
                if self.store.is_empty() {
                    self.show_messages(title, vec!["No bins to check.".to_owned()]);
                    return;
                }
                let threshold = u8_arg(&values, 0);
                let alerts: Vec<String> = self
                    .store
                    .bins_at_or_above(threshold)
                    .iter()
                    .map(|found| {
                        format!(
                            "ALERT: Bin ID {} ({}) is {}% full at {}",
                            found.id, found.waste_type, found.fill_level, found.location
                        )
                    })
                    .collect();
                if alerts.is_empty() {
                    self.show_messages(title, vec!["All bins are below threshold.".to_owned()]);
                } else {
                    self.show_messages(title, alerts);
                }
            }
            MenuAction::SortByFillLevel => {
                self.store.sort_by_fill_level_descending();
                if self.store.is_empty() {
                    self.show_messages(title, vec!["No bins available.".to_owned()]);
                } else {
                    self.show_table("Bins sorted by fill level (descending)", self.store.bins().to_vec());
                }
            }
            MenuAction::SortByType => {
                self.store.sort_by_type_ascending();
                if self.store.is_empty() {
                    self.show_messages(title, vec!["No bins available.".to_owned()]);
                } else {
                    self.show_table("Bins sorted by type (A-Z)", self.store.bins().to_vec());
                }
            }
            MenuAction::ToggleActive => {
                let id = BinId(u32_arg(&values, 0));
                match self.store.toggle_active(id) {
                    Ok(active) => {
                        let state = if active { "Active" } else { "Inactive" };
                        self.show_messages(title, vec![format!("Bin {id} now {state}.")]);
                    }
                    Err(StoreError::EmptyCollection) => {
                        self.show_messages(title, vec!["No bins to toggle.".to_owned()]);
                    }
                    Err(_) => self.show_messages(title, vec!["Bin not found.".to_owned()]),
                }
            }
            MenuAction::PopulateZoneSample => {
                self.store.populate_zone_sample();
                self.show_messages(title, vec!["Zone sample data added.".to_owned()]);
            }
            MenuAction::MergeZones => match self.store.merge_zone_into_main() {
                Ok(report) => {
                    let mut lines: Vec<String> = report
                        .outcomes
                        .iter()
                        .map(|outcome| match outcome {
                            MergeOutcome::Merged(waste_type) => {
                                format!("Merged bin '{waste_type}' from zone.")
                            }
                            MergeOutcome::Skipped(waste_type) => {
                                format!("Skipped duplicate bin '{waste_type}'.")
                            }
                        })
                        .collect();
                    lines.push("Zone merge completed.".to_owned());
                    self.show_messages(title, lines);
                }
                Err(_) => self.show_messages(title, vec!["No zone bins to merge.".to_owned()]),
            },
            MenuAction::SwapDemo => {
                let first = int_arg(&values, 0);
                let second = int_arg(&values, 1);
                self.show_messages(
                    title,
                    vec![
                        format!("Before: a={first} b={second}"),
                        format!("After:  a={second} b={first}"),
                    ],
                );
            }
            MenuAction::BitwiseDemo => {
                let first = int_arg(&values, 0);
                let second = int_arg(&values, 1);
                let line = format!(
                    "AND={} OR={} XOR={}",
                    first & second,
                    first | second,
                    first ^ second
                );
                self.show_messages(title, vec![line]);
            }
            MenuAction::Exit => {}
        }
    }

    fn show_messages(&mut self, title: &str, lines: Vec<String>) {
        self.output_title = title.to_owned();
        self.output = Output::Messages(lines);
        self.screen = Screen::Output;
    }

    fn show_table(&mut self, title: &str, bins: Vec<Bin>) {
        self.output_title = title.to_owned();
        self.output = Output::Table(bins);
        self.screen = Screen::Output;
    }

    fn show_details(&mut self, title: &str, bins: Vec<Bin>) {
        self.output_title = title.to_owned();
        self.output = Output::Details(bins);
        self.screen = Screen::Output;
    }
}

// Form values were validated on commit; the fallbacks only cover impossible
// index or parse mismatches.

fn int_arg(values: &[String], index: usize) -> i64 {
    values
        .get(index)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

fn u32_arg(values: &[String], index: usize) -> u32 {
    u32::try_from(int_arg(values, index)).unwrap_or_default()
}

fn u8_arg(values: &[String], index: usize) -> u8 {
    u8::try_from(int_arg(values, index)).unwrap_or_default()
}

fn text_arg(values: &[String], index: usize) -> String {
    values.get(index).cloned().unwrap_or_default()
}
