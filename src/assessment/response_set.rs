use super::Response;
use crate::catalog;

/// Responses collected during a run, at most one per question id.
///
/// Recording an answer for a question that already has one replaces the value
/// in place; no history is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    responses: Vec<Response>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value, superseding any earlier value for the same question.
    pub fn record(&mut self, question_id: impl Into<String>, value: f64) {
        let question_id = question_id.into();
        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == question_id)
        {
            Some(existing) => existing.value = value,
            None => self.responses.push(Response::new(question_id, value)),
        }
    }

    pub fn get(&self, question_id: &str) -> Option<f64> {
        self.responses
            .iter()
            .find(|r| r.question_id == question_id)
            .map(|r| r.value)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<f64> {
        let index = self
            .responses
            .iter()
            .position(|r| r.question_id == question_id)?;
        Some(self.responses.remove(index).value)
    }

    pub fn clear(&mut self) {
        self.responses.clear();
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn as_responses(&self) -> &[Response] {
        &self.responses
    }

    /// Catalog question ids that have no recorded value, in catalog order.
    pub fn unanswered(&self) -> Vec<&'static str> {
        catalog::all()
            .iter()
            .map(|q| q.id)
            .filter(|id| self.get(id).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.unanswered().is_empty()
    }
}

impl FromIterator<Response> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = Response>>(iter: I) -> Self {
        let mut set = ResponseSet::new();
        for response in iter {
            set.record(response.question_id, response.value);
        }
        set
    }
}

impl From<ResponseSet> for Vec<Response> {
    fn from(set: ResponseSet) -> Self {
        set.responses
    }
}
