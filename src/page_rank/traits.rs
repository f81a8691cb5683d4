use crate::LabelMapper;

pub trait PageRankResult {
    fn page_rank(&self) -> &[f64];

    /// Renders `label: rank` lines, falling back to the node id for
    /// unmapped nodes.
    fn debug<'a>(&'a self, labels: &'a LabelMapper) -> ResultDebug<'a> {
        ResultDebug {
            labels,
            ranks: self.page_rank(),
        }
    }
}

pub struct ResultDebug<'a> {
    labels: &'a LabelMapper,
    ranks: &'a [f64],
}

impl std::fmt::Debug for ResultDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (v, p) in self.ranks.iter().enumerate() {
            if let Some(label) = self.labels.label(v) {
                writeln!(f, "{label}: {p:?}")?;
            } else {
                writeln!(f, "{v}: {p:?}")?;
            }
        }
        Ok(())
    }
}
