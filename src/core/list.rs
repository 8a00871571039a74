use crate::core::stacks::{get_stacks, print_table};
use crate::domain::ports::ServiceLister;
use crate::utils::error::Result;
use std::io::Write;
use tokio::sync::broadcast;

/// `stack ls`: aggregate first, render only once aggregation succeeded.
pub async fn run_list<L, W>(
    lister: &L,
    out: &mut W,
    cancel: &mut broadcast::Receiver<()>,
) -> Result<()>
where
    L: ServiceLister + ?Sized,
    W: Write,
{
    let stacks = get_stacks(lister, cancel).await?;
    tracing::debug!("Rendering {} stacks", stacks.len());
    print_table(out, stacks);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::Filters;
    use crate::domain::model::{Service, ServiceSpec, LABEL_NAMESPACE};
    use crate::utils::error::StackError;
    use async_trait::async_trait;

    struct FailingLister;

    #[async_trait]
    impl ServiceLister for FailingLister {
        async fn list_services(&self, _filters: &Filters) -> Result<Vec<Service>> {
            Err(StackError::ApiStatusError {
                status: 500,
                message: "daemon exploded".to_string(),
            })
        }
    }

    struct UnlabeledLister;

    #[async_trait]
    impl ServiceLister for UnlabeledLister {
        async fn list_services(&self, _filters: &Filters) -> Result<Vec<Service>> {
            Ok(vec![Service {
                id: "nolabel".to_string(),
                spec: ServiceSpec::default(),
            }])
        }
    }

    struct FixedLister(Vec<(&'static str, &'static str)>);

    #[async_trait]
    impl ServiceLister for FixedLister {
        async fn list_services(&self, _filters: &Filters) -> Result<Vec<Service>> {
            Ok(self
                .0
                .iter()
                .map(|(id, ns)| {
                    let mut spec = ServiceSpec::default();
                    spec.labels
                        .insert(LABEL_NAMESPACE.to_string(), ns.to_string());
                    Service {
                        id: id.to_string(),
                        spec,
                    }
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_run_list_renders_table() {
        let lister = FixedLister(vec![("1", "shop"), ("2", "shop"), ("3", "cms")]);
        let (_tx, mut rx) = broadcast::channel(1);
        let mut out = Vec::new();

        run_list(&lister, &mut out, &mut rx).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "NAME  SERVICES\ncms   1\nshop  2\n"
        );
    }

    #[tokio::test]
    async fn test_api_error_propagates_without_output() {
        let (_tx, mut rx) = broadcast::channel(1);
        let mut out = Vec::new();

        let err = run_list(&FailingLister, &mut out, &mut rx)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("daemon exploded"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_missing_label_produces_no_output() {
        let (_tx, mut rx) = broadcast::channel(1);
        let mut out = Vec::new();

        let err = run_list(&UnlabeledLister, &mut out, &mut rx)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "cannot get label com.docker.stack.namespace for service nolabel"
        );
        assert!(out.is_empty());
    }
}
