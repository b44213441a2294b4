use crate::error::AgentResult;
use async_trait::async_trait;
use futures::future::join_all;
use tracing::{info_span, Instrument};

#[async_trait]
pub trait Node: Send {
    fn name(&self) -> String;
    async fn init(&mut self) -> AgentResult<()>;
    async fn run(&mut self) -> AgentResult<()>;
}

/// Initializes and runs every node concurrently. Each node is driven on its
/// own future and owns its state, so one failing node does not stop the rest.
/// Results come back in input order.
pub async fn execute_nodes(nodes: Vec<Box<dyn Node>>) -> Vec<AgentResult<()>> {
    join_all(nodes.into_iter().map(|mut node| {
        let span = info_span!("node", name = %node.name());
        async move {
            node.init().await?;
            node.run().await
        }
        .instrument(span)
    }))
    .await
}
