use super::Operation;
use crate::{Error, Result};

use url::Url;

/// Credentials attached to every outgoing call. A user token, when present,
/// takes the place of a session ticket.
#[derive(Debug, Clone, Default)]
pub struct Auth {
    pub ticket: Option<String>,
    pub user_token: Option<String>,
    pub app_token: Option<String>,
}

/// One outgoing call, lowered to what the HTTP layer needs: the action name,
/// the target URI, and the ordered payload parameters.
#[derive(Debug, Clone)]
pub struct Request {
    pub action: &'static str,
    pub url: Url,
    pub params: Vec<(String, String)>,
}

impl Operation {
    /// The `API_*` action name for this operation.
    pub fn action(&self) -> &'static str {
        use Operation::*;

        match self {
            Query(_) => "API_DoQuery",
            QueryCount(_) => "API_DoQueryCount",
            GetSchema(_) => "API_GetSchema",
            GetNumRecords(_) => "API_GetNumRecords",
            ImportTable(_) => "API_ImportFromCSV",
            AddRecord(_) => "API_AddRecord",
            EditRecord(_) => "API_EditRecord",
            DeleteRecord(_) => "API_DeleteRecord",
            PurgeRecords(_) => "API_PurgeRecords",
            FieldAddChoices(_) => "API_FieldAddChoices",
            FieldRemoveChoices(_) => "API_FieldRemoveChoices",
        }
    }

    /// Lowers the operation into a request descriptor targeting the table's
    /// database endpoint on the given account domain.
    pub fn to_request(&self, auth: &Auth, account_domain: &str) -> Result<Request> {
        let url = Url::parse(&format!("https://{account_domain}/db/{}", self.dbid()))
            .map_err(|err| Error::validation(format!("invalid account domain: {err}")))?;

        let mut params = Vec::new();
        match (&auth.user_token, &auth.ticket) {
            (Some(token), _) => params.push(("usertoken".to_string(), token.clone())),
            (None, Some(ticket)) => params.push(("ticket".to_string(), ticket.clone())),
            (None, None) => {}
        }
        if let Some(token) = &auth.app_token {
            params.push(("apptoken".to_string(), token.clone()));
        }
        self.push_params(&mut params);

        Ok(Request {
            action: self.action(),
            url,
            params,
        })
    }

    fn push_params(&self, params: &mut Vec<(String, String)>) {
        use Operation::*;

        fn push(params: &mut Vec<(String, String)>, name: &str, value: impl ToString) {
            params.push((name.to_string(), value.to_string()));
        }

        match self {
            Query(op) => {
                if let Some(query) = &op.query {
                    push(params, "query", query);
                }
                if let Some(qid) = op.qid {
                    push(params, "qid", qid);
                }
                if let Some(clist) = &op.clist {
                    push(params, "clist", clist);
                }
                if let Some(slist) = &op.slist {
                    push(params, "slist", slist);
                }
                if let Some(options) = &op.options {
                    push(params, "options", options);
                }
                if op.fmt_structured {
                    push(params, "fmt", "structured");
                }
            }
            QueryCount(op) => {
                if let Some(query) = &op.query {
                    push(params, "query", query);
                }
                if let Some(qid) = op.qid {
                    push(params, "qid", qid);
                }
            }
            GetSchema(_) | GetNumRecords(_) => {}
            ImportTable(op) => {
                push(params, "records_csv", &op.rows);
                push(params, "clist", &op.clist);
                if op.time_in_utc {
                    push(params, "msInUTC", "1");
                }
            }
            AddRecord(op) => {
                for (fid, value) in &op.fields {
                    push(params, &format!("_fid_{fid}"), value);
                }
            }
            EditRecord(op) => {
                push(params, "rid", op.record_id);
                for (fid, value) in &op.fields {
                    push(params, &format!("_fid_{fid}"), value);
                }
            }
            DeleteRecord(op) => {
                push(params, "rid", op.record_id);
            }
            PurgeRecords(op) => {
                if let Some(query) = &op.query {
                    push(params, "query", query);
                }
                if let Some(qid) = op.qid {
                    push(params, "qid", qid);
                }
            }
            FieldAddChoices(op) => {
                push(params, "fid", op.fid);
                for choice in &op.choices {
                    push(params, "choice", choice);
                }
            }
            FieldRemoveChoices(op) => {
                push(params, "fid", op.fid);
                for choice in &op.choices {
                    push(params, "choice", choice);
                }
            }
        }
    }
}
