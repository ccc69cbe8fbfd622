use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Cinematic,
    Ads,
    Podcast,
    Graphics,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Cinematic,
        Category::Ads,
        Category::Podcast,
        Category::Graphics,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Cinematic => "cinematic",
            Category::Ads => "ads",
            Category::Podcast => "podcast",
            Category::Graphics => "graphics",
        }
    }

    /// Label for the filter button.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::All => "All Projects",
            Category::Cinematic => "Cinematic",
            Category::Ads => "Advertisements",
            Category::Podcast => "Podcast",
            Category::Graphics => "Graphics",
        }
    }

    fn matches(self, project: &Project) -> bool {
        self == Category::All || self == project.category
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub thumbnail: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Epic Brand Commercial",
        category: Category::Cinematic,
        thumbnail: "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?w=600&h=400&fit=crop",
        duration: "2:30",
        description: "Cinematic brand story with dynamic motion graphics",
    },
    Project {
        id: 2,
        title: "Tech Product Launch",
        category: Category::Ads,
        thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        duration: "1:15",
        description: "High-energy product showcase with sleek animations",
    },
    Project {
        id: 3,
        title: "Podcast Intro Sequence",
        category: Category::Podcast,
        thumbnail: "https://images.unsplash.com/photo-1590602847861-f357a9332bbc?w=600&h=400&fit=crop",
        duration: "0:45",
        description: "Animated podcast branding with sound design",
    },
    Project {
        id: 4,
        title: "Music Video Graphics",
        category: Category::Graphics,
        thumbnail: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=600&h=400&fit=crop",
        duration: "3:45",
        description: "Synchronized motion graphics for music video",
    },
    Project {
        id: 5,
        title: "Documentary Trailer",
        category: Category::Cinematic,
        thumbnail: "https://images.unsplash.com/photo-1489599735854-648f56b2b8fe?w=600&h=400&fit=crop",
        duration: "1:30",
        description: "Emotional storytelling with cinematic editing",
    },
    Project {
        id: 6,
        title: "Social Media Campaign",
        category: Category::Ads,
        thumbnail: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=600&h=400&fit=crop",
        duration: "0:30",
        description: "Viral social media content with trendy effects",
    },
];

/// Projects shown for `category`, in declaration order.
pub fn filter(category: Category) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| category.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        assert_eq!(ids(&filter(Category::All)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(ids(&filter(Category::Cinematic)), vec![1, 5]);
        assert_eq!(ids(&filter(Category::Ads)), vec![2, 6]);
        assert_eq!(ids(&filter(Category::Podcast)), vec![3]);
        assert_eq!(ids(&filter(Category::Graphics)), vec![4]);
    }

    #[test]
    fn test_every_project_has_a_concrete_category() {
        for project in PROJECTS {
            assert_ne!(project.category, Category::All, "{}", project.title);
        }
        let total: usize = Category::ALL[1..].iter().map(|c| filter(*c).len()).sum();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Podcast.to_string(), "podcast");
        assert_eq!(Category::default(), Category::All);
        assert_eq!(Category::Ads.display_name(), "Advertisements");
    }
}
