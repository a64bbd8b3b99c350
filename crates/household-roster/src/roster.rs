//! Household Roster
//!
//! Ordered member rows captured from the form. The table on the page is a
//! projection of this value; submit reads from here, never from the markup.

use std::fmt;

use crate::draft::FormDraft;
use crate::error::{RosterError, RosterResult};
use crate::field::FormSchema;
use crate::payload;
use crate::validate::validate;
use crate::value::FieldValue;

/// Stable row identifier, assigned at add time and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(pub u32);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One data cell: the field name it came from and the captured value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub header: String,
    pub value: FieldValue,
}

/// One household member snapshot. Immutable once added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    cells: Vec<Cell>,
}

impl Member {
    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn value(&self, header: &str) -> Option<&FieldValue> {
        self.cells.iter().find(|c| c.header == header).map(|c| &c.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    schema: FormSchema,
    members: Vec<Member>,
    next_id: u32,
}

impl Roster {
    pub fn new(schema: FormSchema) -> Self {
        Self { schema, members: Vec::new(), next_id: 1 }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Count line shown under the table
    pub fn summary(&self) -> String {
        match self.members.len() {
            1 => "1 member".to_string(),
            n => format!("{} members", n),
        }
    }

    /// Header captions including the blank removal column
    pub fn header_cells(&self) -> Vec<String> {
        self.schema.header_cells()
    }

    /// Validate the draft and append it as a new row at the end
    pub fn add(&mut self, draft: &FormDraft) -> RosterResult<MemberId> {
        if let Err(errors) = validate(draft) {
            log::warn!("[ROSTER] Add refused: {:?}", errors);
            return Err(errors.into());
        }
        let cells = self.capture(draft)?;

        let id = MemberId(self.next_id);
        self.next_id += 1;
        self.members.push(Member { id, cells });
        log::debug!("[ROSTER] Added member {}, {} rows", id, self.members.len());
        Ok(id)
    }

    /// Add the draft and, only when the add succeeds, reset the whole form.
    /// A refused draft is left as typed so the user can correct it.
    pub fn add_and_reset(&mut self, draft: &mut FormDraft) -> RosterResult<MemberId> {
        let id = self.add(draft)?;
        draft.reset(&self.schema);
        Ok(id)
    }

    /// One cell per schema field, in schema order
    fn capture(&self, draft: &FormDraft) -> RosterResult<Vec<Cell>> {
        self.schema
            .fields
            .iter()
            .map(|field| {
                let value = draft.get(&field.name).ok_or_else(|| {
                    RosterError::Schema(format!("draft has no field '{}'", field.name))
                })?;
                let value = if field.is_checkbox() {
                    FieldValue::Flag(value.as_flag())
                } else {
                    FieldValue::text(value.as_text())
                };
                Ok(Cell { header: field.name.clone(), value })
            })
            .collect()
    }

    /// Remove a row wherever it sits
    pub fn remove(&mut self, id: MemberId) -> RosterResult<Member> {
        let pos = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or(RosterError::NotFound(id))?;
        let removed = self.members.remove(pos);
        log::debug!("[ROSTER] Removed member {}, {} rows left", id, self.members.len());
        Ok(removed)
    }

    /// JSON payload of the current rows, `[]` when empty
    pub fn to_json(&self) -> RosterResult<String> {
        payload::serialize_members(&self.members)
    }

    /// Submit: render the payload, then clear the form. The rows stay.
    pub fn submit(&self, draft: &mut FormDraft) -> RosterResult<String> {
        let json = self.to_json()?;
        draft.reset(&self.schema);
        Ok(json)
    }
}
