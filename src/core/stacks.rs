use crate::domain::filters::Filters;
use crate::domain::model::{Stack, LABEL_NAMESPACE};
use crate::domain::ports::ServiceLister;
use crate::utils::error::{Result, StackError};
use std::collections::HashMap;
use std::io::Write;
use tabwriter::TabWriter;
use tokio::sync::broadcast::{self, error::RecvError};

/// Fetch every service that belongs to a stack and count them per namespace.
///
/// The returned stacks are in no particular order. A service that matched the
/// stack filter but carries no namespace label aborts the whole aggregation.
/// Firing `cancel` drops the in-flight request and yields
/// [`StackError::CancelledError`].
pub async fn get_stacks<L>(lister: &L, cancel: &mut broadcast::Receiver<()>) -> Result<Vec<Stack>>
where
    L: ServiceLister + ?Sized,
{
    let filters = Filters::all_stacks();

    let services = tokio::select! {
        result = lister.list_services(&filters) => result?,
        _ = cancelled(cancel) => {
            tracing::debug!("Service listing cancelled");
            return Err(StackError::CancelledError);
        }
    };

    let mut counts: HashMap<String, usize> = HashMap::new();
    for service in &services {
        let name = service
            .namespace()
            .ok_or_else(|| StackError::MissingLabelError {
                label: LABEL_NAMESPACE.to_string(),
                service_id: service.id.clone(),
            })?;
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }

    tracing::debug!(
        "Grouped {} services into {} stacks",
        services.len(),
        counts.len()
    );

    Ok(counts
        .into_iter()
        .map(|(name, services)| Stack { name, services })
        .collect())
}

async fn cancelled(cancel: &mut broadcast::Receiver<()>) {
    match cancel.recv().await {
        Ok(()) | Err(RecvError::Lagged(_)) => {}
        // 發送端已關閉，不會再有取消訊號
        Err(RecvError::Closed) => std::future::pending::<()>().await,
    }
}

/// Write the stacks as a `NAME`/`SERVICES` table sorted by name.
///
/// Columns are padded to the widest cell plus two spaces; the last column is
/// left unpadded. Output is best effort: write and flush failures are logged
/// and dropped.
pub fn print_table<W: Write>(out: &mut W, mut stacks: Vec<Stack>) {
    stacks.sort_by(|a, b| a.name.cmp(&b.name));

    {
        let mut tw = TabWriter::new(&mut *out).minwidth(0).padding(2);
        // TabWriter 只寫入內部緩衝，錯誤會在 flush 時才出現
        let _ = writeln!(tw, "NAME\tSERVICES");
        for stack in &stacks {
            let _ = writeln!(tw, "{}\t{}", stack.name, stack.services);
        }
        if let Err(e) = tw.flush() {
            tracing::debug!("Ignoring table flush error: {}", e);
        }
    }

    if let Err(e) = out.flush() {
        tracing::debug!("Ignoring flush error: {}", e);
    }
}
