use crate::record::EventRecord;

/// In-memory table of every ingested record.
///
/// Input order is whatever the builder produced; views sort explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTable {
    records: Vec<EventRecord>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    pub fn connects(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter().filter(|r| r.is_connect())
    }

    pub fn connect_count(&self) -> usize {
        self.connects().count()
    }

    /// Concatenate `other` onto this table. No deduplication.
    pub fn append(&mut self, other: EventTable) {
        if self.records.is_empty() {
            self.records = other.records;
        } else {
            self.records.extend(other.records);
        }
    }

    pub fn into_records(self) -> Vec<EventRecord> {
        self.records
    }
}

impl From<Vec<EventRecord>> for EventTable {
    fn from(records: Vec<EventRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<EventRecord> for EventTable {
    fn from_iter<I: IntoIterator<Item = EventRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EventTable {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
