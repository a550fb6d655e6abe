// crates/trialsites-core/src/grouping.rs
use crate::model::{CityGroup, SiteRecord};
use std::collections::BTreeMap;

/// Groups sites by city.
///
/// Groups come out in ascending city order; inside a group the sites keep
/// their input order. Sites without a city are left out.
pub fn group_by_city<'a, I>(sites: I) -> Vec<CityGroup>
where
    I: IntoIterator<Item = &'a SiteRecord>,
{
    let mut by_city: BTreeMap<&'a str, Vec<SiteRecord>> = BTreeMap::new();
    let mut skipped = 0usize;

    for site in sites {
        match site.city() {
            Some(city) => by_city.entry(city).or_default().push(site.clone()),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "sites without a city left out of city grouping");
    }

    by_city
        .into_iter()
        .map(|(city, sites)| CityGroup {
            city: city.to_owned(),
            sites,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecruitmentStatus;

    fn site(name: &str, city: &str) -> SiteRecord {
        SiteRecord::new(name, RecruitmentStatus::Active).in_city(city)
    }

    #[test]
    fn empty_input() {
        assert!(group_by_city(&Vec::<SiteRecord>::new()).is_empty());
    }

    #[test]
    fn cities_sorted_and_sites_stable() {
        let sites = vec![
            site("s1", "Rockville"),
            site("s2", "Baltimore"),
            site("s3", "Rockville"),
            site("s4", "Annapolis"),
            site("s5", "Rockville"),
        ];
        let groups = group_by_city(&sites);
        let cities: Vec<_> = groups.iter().map(|g| g.city.as_str()).collect();
        assert_eq!(cities, vec!["Annapolis", "Baltimore", "Rockville"]);

        let rockville: Vec<_> = groups[2].sites.iter().map(|s| s.name()).collect();
        assert_eq!(rockville, vec!["s1", "s3", "s5"]);
    }

    #[test]
    fn sites_without_city_are_dropped() {
        let sites = vec![
            site("s1", "Boston"),
            SiteRecord::new("s2", RecruitmentStatus::Active),
        ];
        let groups = group_by_city(&sites);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sites.len(), 1);
    }

    #[test]
    fn works_on_filtered_iterators() {
        let sites = vec![site("s1", "Boston"), site("s2", "Austin")];
        let groups = group_by_city(sites.iter().filter(|s| s.name() == "s2"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].city, "Austin");
    }
}
