//! Fixed keyword tables driving tag filtering, classification and bundling.
//!
//! Rule order is significant: classification returns the first rule with a
//! matching keyword, so entries must not be reordered.

/// Generic English and marketing words dropped from trigger lists.
pub static STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "in",
    "into", "is", "it", "its", "of", "on", "or", "our", "out", "over", "that", "the", "their",
    "they", "this", "to", "use", "when", "with", "you", "your", "will", "can", "if", "not", "only",
    "also", "more", "best", "practice", "practices", "expert", "specialist", "focused", "focus",
    "master", "modern", "advanced", "comprehensive", "production", "production-ready", "ready",
    "build", "create", "deliver", "design", "implement", "implementation", "strategy",
    "strategies", "patterns", "pattern", "workflow", "workflows", "guide", "template",
    "templates", "tool", "tools", "project", "projects", "support", "manage", "management",
    "system", "systems", "services", "service", "across", "end", "end-to-end", "using", "based",
    "ensure", "help", "needs", "need", "focuses", "handles", "builds", "make",
];

/// Role and process nouns dropped when tags are derived from a skill id.
pub static TAG_STOPWORDS: &[&str] = &[
    "pro", "expert", "patterns", "pattern", "workflow", "workflows", "templates", "template",
    "toolkit", "tools", "tool", "project", "projects", "guide", "management", "engineer",
    "architect", "developer", "specialist", "assistant", "analysis", "review", "reviewer",
    "automation", "orchestration", "scaffold", "scaffolding", "implementation", "strategy",
    "context", "feature", "features", "smart", "system", "systems", "design", "development",
    "test", "testing",
];

/// Category assigned when no rule matches.
pub const DEFAULT_CATEGORY: &str = "general";

/// A category label and the keywords that select it.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Category rules in evaluation order.
pub static CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "security",
        keywords: &[
            "security", "sast", "compliance", "privacy", "threat", "vulnerability", "owasp", "pci",
            "gdpr", "secrets", "risk", "malware", "forensics", "attack", "incident", "auth", "mtls",
            "zero", "trust",
        ],
    },
    CategoryRule {
        name: "infrastructure",
        keywords: &[
            "kubernetes", "k8s", "helm", "terraform", "cloud", "network", "devops", "gitops",
            "prometheus", "grafana", "observability", "monitoring", "logging", "tracing",
            "deployment", "istio", "linkerd", "service", "mesh", "slo", "sre", "oncall",
            "incident", "pipeline", "cicd", "ci", "cd", "kafka",
        ],
    },
    CategoryRule {
        name: "data-ai",
        keywords: &[
            "data", "database", "db", "sql", "postgres", "mysql", "analytics", "etl", "warehouse",
            "dbt", "ml", "ai", "llm", "rag", "vector", "embedding", "spark", "airflow", "cdc",
            "pipeline",
        ],
    },
    CategoryRule {
        name: "development",
        keywords: &[
            "python", "javascript", "typescript", "java", "golang", "go", "rust", "csharp",
            "dotnet", "php", "ruby", "node", "react", "frontend", "backend", "mobile", "ios",
            "android", "flutter", "fastapi", "django", "nextjs", "vue", "api",
        ],
    },
    CategoryRule {
        name: "architecture",
        keywords: &[
            "architecture", "c4", "microservices", "event", "cqrs", "saga", "domain", "ddd",
            "patterns", "decision", "adr",
        ],
    },
    CategoryRule {
        name: "testing",
        keywords: &["testing", "tdd", "unit", "e2e", "qa", "test"],
    },
    CategoryRule {
        name: "business",
        keywords: &[
            "business", "market", "sales", "finance", "startup", "legal", "hr", "product",
            "customer", "seo", "marketing", "kpi", "contract", "employment",
        ],
    },
    CategoryRule {
        name: "workflow",
        keywords: &[
            "workflow", "orchestration", "conductor", "automation", "process", "collaboration",
        ],
    },
];

/// A named bundle and the keywords that pull skills into it.
#[derive(Debug, Clone, Copy)]
pub struct BundleRule {
    pub name: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// Bundle rules in output order.
pub static BUNDLE_RULES: &[BundleRule] = &[
    BundleRule {
        name: "core-dev",
        description: "Core development skills across languages, frameworks, and backend/frontend fundamentals.",
        keywords: &[
            "python", "javascript", "typescript", "go", "golang", "rust", "java", "node",
            "frontend", "backend", "react", "fastapi", "django", "nextjs", "api", "mobile", "ios",
            "android", "flutter", "php", "ruby",
        ],
    },
    BundleRule {
        name: "security-core",
        description: "Security, privacy, and compliance essentials.",
        keywords: &[
            "security", "sast", "compliance", "threat", "risk", "privacy", "secrets", "owasp",
            "gdpr", "pci", "vulnerability", "auth",
        ],
    },
    BundleRule {
        name: "k8s-core",
        description: "Kubernetes and service mesh essentials.",
        keywords: &["kubernetes", "k8s", "helm", "istio", "linkerd", "service", "mesh"],
    },
    BundleRule {
        name: "data-core",
        description: "Data engineering and analytics foundations.",
        keywords: &[
            "data", "database", "sql", "dbt", "airflow", "spark", "analytics", "etl", "warehouse",
            "postgres", "mysql", "kafka",
        ],
    },
    BundleRule {
        name: "ops-core",
        description: "Operations, observability, and delivery pipelines.",
        keywords: &[
            "observability", "monitoring", "logging", "tracing", "prometheus", "grafana", "devops",
            "gitops", "deployment", "cicd", "pipeline", "slo", "sre", "incident",
        ],
    },
];

/// Hand-picked starter skills, in presentation order.
pub static CURATED_COMMON: &[&str] = &[
    "bash-pro",
    "python-pro",
    "javascript-pro",
    "typescript-pro",
    "golang-pro",
    "rust-pro",
    "java-pro",
    "frontend-developer",
    "backend-architect",
    "nodejs-backend-patterns",
    "fastapi-pro",
    "api-design-principles",
    "sql-pro",
    "database-architect",
    "kubernetes-architect",
    "terraform-specialist",
    "observability-engineer",
    "security-auditor",
    "sast-configuration",
    "gitops-workflow",
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

pub fn is_tag_stopword(token: &str) -> bool {
    TAG_STOPWORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_precedes_infrastructure() {
        let names: Vec<_> = CATEGORY_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "security",
                "infrastructure",
                "data-ai",
                "development",
                "architecture",
                "testing",
                "business",
                "workflow",
            ]
        );
    }

    #[test]
    fn bundle_keywords_are_lowercase() {
        for rule in BUNDLE_RULES {
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "bundle {}", rule.name);
            }
        }
    }

    #[test]
    fn stopword_lookups() {
        assert!(is_stopword("the"));
        assert!(!is_stopword("kubernetes"));
        assert!(is_tag_stopword("design"));
        assert!(!is_tag_stopword("api"));
    }
}
