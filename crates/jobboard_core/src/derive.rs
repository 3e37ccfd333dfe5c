use crate::{Job, Signal, Subscription};

/// Jobs whose `request_id` contains `filter`, in their original order.
///
/// Matching is a case-sensitive substring test; an empty filter keeps every job.
pub fn derive_view(jobs: &[Job], filter: &str) -> Vec<Job> {
    jobs.iter()
        .filter(|job| job.request_id.contains(filter))
        .cloned()
        .collect()
}

/// Latest derived view of a job collection under a filter.
///
/// Recomputed whenever either source changes. Stays `None` until the
/// collection has arrived.
#[derive(Debug)]
pub struct DerivedJobs {
    output: Signal<Option<Vec<Job>>>,
    _subscriptions: [Subscription; 2],
}

impl DerivedJobs {
    pub fn bind(jobs: &Signal<Option<Vec<Job>>>, filter: &Signal<String>) -> Self {
        let output = Signal::new(recompute(jobs, filter));

        let on_jobs = {
            let filter = filter.clone();
            let output = output.clone();
            jobs.subscribe(move |jobs| {
                let next = jobs
                    .as_deref()
                    .map(|jobs| filter.with(|filter| derive_view(jobs, filter)));
                output.set(next);
            })
        };
        let on_filter = {
            let jobs = jobs.clone();
            let output = output.clone();
            filter.subscribe(move |filter| {
                let next = jobs.with(|jobs| jobs.as_deref().map(|jobs| derive_view(jobs, filter)));
                output.set(next);
            })
        };

        Self {
            output,
            _subscriptions: [on_jobs, on_filter],
        }
    }

    pub fn current(&self) -> Option<Vec<Job>> {
        self.output.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(Option<&[Job]>) -> R) -> R {
        self.output.with(|jobs| f(jobs.as_deref()))
    }
}

fn recompute(jobs: &Signal<Option<Vec<Job>>>, filter: &Signal<String>) -> Option<Vec<Job>> {
    jobs.with(|jobs| {
        jobs.as_deref()
            .map(|jobs| filter.with(|filter| derive_view(jobs, filter)))
    })
}
