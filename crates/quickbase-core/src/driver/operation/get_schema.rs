use super::Operation;

#[derive(Debug, Clone)]
pub struct GetSchema {
    pub dbid: String,
}

impl From<GetSchema> for Operation {
    fn from(value: GetSchema) -> Self {
        Self::GetSchema(value)
    }
}
