//! Static blog content.

/// Site title used when no post is shown.
pub const SITE_TITLE: &str = "CustomCreations - Design Your Dreams";

/// A published blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub seo_title: Option<&'static str>,
    pub meta_description: Option<&'static str>,
    pub keyphrase: &'static str,
    /// Listing summary.
    pub description: &'static str,
    /// ISO date.
    pub date: &'static str,
    pub category: &'static str,
    pub author: &'static str,
}

impl BlogPost {
    /// Title for the page showing this post.
    pub fn page_title(&self) -> &'static str {
        self.seo_title.unwrap_or(self.title)
    }

    /// Meta description, falling back to the title.
    pub fn summary(&self) -> &'static str {
        self.meta_description.unwrap_or(self.title)
    }
}

// Newest first.
const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "top-5-personalized-gift-ideas-for-holidays",
        title: "Top 5 Personalized Gift Ideas for the Holidays",
        seo_title: Some("Best Personalized Gift Ideas for Holidays | CustomCreations"),
        meta_description: Some(
            "Discover unique and heartfelt custom gifts like personalized apparel and mugs for the holidays. Find inspiration for memorable presents at CustomCreations.",
        ),
        keyphrase: "personalized gift ideas",
        description: "Discover unique and heartfelt custom gifts that will wow your loved ones this holiday season. From custom apparel to personalized mugs, find inspiration here.",
        date: "2025-05-15",
        category: "Gift Ideas",
        author: "Jane Doe",
    },
    BlogPost {
        slug: "designing-your-own-tshirt-a-beginners-guide",
        title: "Designing Your Own T-Shirt: A Beginner's Guide",
        seo_title: Some("How to Design Your Own T-Shirt | Beginner Tips | CustomCreations"),
        meta_description: Some(
            "Learn the basics of t-shirt design, from choosing graphics to color theory. Create stunning custom t-shirts with our easy guide. Start designing at CustomCreations!",
        ),
        keyphrase: "designing your own t-shirt",
        description: "Learn the basics of t-shirt design, from choosing the right graphics to understanding color theory. Create stunning custom t-shirts with ease!",
        date: "2025-05-10",
        category: "Design Tips",
        author: "Alex Creative",
    },
    BlogPost {
        slug: "why-custom-mugs-make-the-perfect-corporate-gift",
        title: "Why Custom Mugs Make the Perfect Corporate Gift",
        seo_title: Some("Custom Mugs for Corporate Gifting | Benefits & Ideas | CustomCreations"),
        meta_description: Some(
            "Discover why personalized mugs are ideal corporate gifts. Boost brand visibility and morale with custom mugs from CustomCreations. Practical and memorable.",
        ),
        keyphrase: "custom mugs corporate gift",
        description: "Explore the benefits of using personalized mugs as corporate gifts. Boost brand visibility and employee morale with this practical and thoughtful present.",
        date: "2025-05-05",
        category: "Business",
        author: "Marketer Mike",
    },
];

/// All posts, newest first.
pub fn posts() -> &'static [BlogPost] {
    POSTS
}

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

/// Title of the post page for `slug`, or the site title if there is no such post.
pub fn page_title(slug: &str) -> &'static str {
    find_post(slug).map_or(SITE_TITLE, BlogPost::page_title)
}
