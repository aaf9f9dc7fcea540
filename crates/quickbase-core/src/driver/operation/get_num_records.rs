use super::Operation;

#[derive(Debug, Clone)]
pub struct GetNumRecords {
    pub dbid: String,
}

impl From<GetNumRecords> for Operation {
    fn from(value: GetNumRecords) -> Self {
        Self::GetNumRecords(value)
    }
}
