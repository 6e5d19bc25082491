//! Minimal person registry supplying candidate identities to the board.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{CandidateIdentity, IdentityChange};
use crate::unique_list::{Identified, UniqueList, UniqueListError};

/// A candidate record. Two people are the same person when their names match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: String,
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, RegistryError> {
        let person = Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
        };
        person.validate()?;
        Ok(person)
    }

    pub fn identity(&self) -> CandidateIdentity {
        CandidateIdentity::new(self.name.clone(), self.email.clone())
    }

    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::BlankField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(RegistryError::BlankField("email"));
        }
        Ok(())
    }
}

impl Identified for Person {
    fn same_identity(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("a person named '{name}' already exists")]
    DuplicatePerson { name: String },
    #[error("no person named '{name}'")]
    PersonNotFound { name: String },
    #[error("index {index} is out of range for {len} person(s)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("person {0} must not be blank")]
    BlankField(&'static str),
}

/// Insertion-ordered, name-unique list of people.
#[derive(Debug, Clone, Default)]
pub struct PersonRegistry {
    persons: UniqueList<Person>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_persons(persons: Vec<Person>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.set_all(persons)?;
        Ok(registry)
    }

    pub fn add(&mut self, person: Person) -> Result<(), RegistryError> {
        let name = person.name.clone();
        self.persons
            .push(person)
            .map_err(|_| RegistryError::DuplicatePerson { name: name.clone() })?;
        info!(%name, "person added");
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Person, RegistryError> {
        let len = self.persons.len();
        let removed = self
            .persons
            .remove_at(index)
            .ok_or(RegistryError::IndexOutOfRange { index, len })?;
        info!(name = %removed.name, "person removed");
        Ok(removed)
    }

    /// Candidate snapshot for a new schedule entry.
    pub fn lookup(&self, index: usize) -> Result<CandidateIdentity, RegistryError> {
        self.get(index).map(Person::identity)
    }

    pub fn get(&self, index: usize) -> Result<&Person, RegistryError> {
        self.persons
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange {
                index,
                len: self.persons.len(),
            })
    }

    /// Replace the person at `index`. Returns the identity change to forward to the
    /// board when the name or email changed.
    pub fn edit(
        &mut self,
        index: usize,
        updated: Person,
    ) -> Result<Option<IdentityChange>, RegistryError> {
        updated.validate()?;
        let target = self.get(index)?.clone();
        let name = updated.name.clone();
        let change = IdentityChange::new(target.identity(), updated.identity());

        self.persons
            .replace(&target, updated)
            .map_err(|err| match err {
                UniqueListError::Duplicate => RegistryError::DuplicatePerson { name },
                UniqueListError::NotFound => RegistryError::PersonNotFound {
                    name: target.name.clone(),
                },
            })?;

        if change.is_noop() {
            return Ok(None);
        }
        info!(previous = %change.previous, current = %change.current, "person edited");
        Ok(Some(change))
    }

    pub fn set_all(&mut self, persons: Vec<Person>) -> Result<(), RegistryError> {
        for person in &persons {
            person.validate()?;
        }
        self.persons
            .try_set_all(persons, |duplicate| RegistryError::DuplicatePerson {
                name: duplicate.name.clone(),
            })
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Person> {
        self.persons.iter().find(|person| person.name == name)
    }

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
