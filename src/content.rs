//! Static page content. Everything here is defined once at compile time and
//! never mutated.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceKind {
    Work,
    Education,
    Freelance,
}

impl ExperienceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceKind::Work => "Trabajo",
            ExperienceKind::Education => "Educación",
            ExperienceKind::Freelance => "Freelance",
        }
    }

    /// Tailwind gradient stops for the badge and timeline marker.
    pub fn accent(&self) -> &'static str {
        match self {
            ExperienceKind::Work => "from-green-600 to-green-700",
            ExperienceKind::Education => "from-blue-600 to-blue-700",
            ExperienceKind::Freelance => "from-purple-600 to-purple-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub id: u32,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub kind: ExperienceKind,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: Option<&'static [&'static str]>,
}

impl ExperienceItem {
    /// Timeline entries alternate sides, starting on the left.
    pub fn is_left(index: usize) -> bool {
        index % 2 == 0
    }
}

/// Grid footprint of a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSize {
    Large,
    Wide,
    Regular,
}

impl ProjectSize {
    pub fn grid_class(&self) -> &'static str {
        match self {
            ProjectSize::Large => "md:col-span-2 md:row-span-2",
            ProjectSize::Wide => "md:col-span-2",
            ProjectSize::Regular => "md:col-span-1",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub achievement: &'static str,
    pub image: &'static str,
    pub repository_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub size: ProjectSize,
}

impl Project {
    /// The first `limit` technologies plus how many were left out.
    pub fn tech_preview(&self, limit: usize) -> (&'static [&'static str], usize) {
        let shown = limit.min(self.technologies.len());
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }
}

pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
}

/// The technology strip is rendered as the list twice in a row so the CSS
/// scroll animation can wrap seamlessly.
pub fn marquee() -> impl Iterator<Item = (usize, &'static Technology)> {
    TECHNOLOGIES.iter().chain(TECHNOLOGIES.iter()).enumerate()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillSummary {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelIcon {
    Mail,
    Github,
    Languages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: ChannelIcon,
    pub title: &'static str,
    pub content: &'static str,
    pub href: Option<&'static str>,
}

impl ContactChannel {
    /// Web links open in a new browsing context; `mailto:` stays in place.
    pub fn opens_new_context(&self) -> bool {
        self.href.is_some_and(is_web_link)
    }
}

pub fn is_web_link(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

pub const OWNER_NAME: &str = "Joaquin Andres";
pub const OWNER_SURNAME: &str = "Peredo Rodriguez";
pub const OWNER_INITIALS: &str = "JP";
pub const OWNER_ROLE: &str = "Desarrollador Backend";
pub const EMAIL: &str = "peredoroj@gmail.com";
pub const MAILTO: &str = "mailto:peredoroj@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/jhoaking";
pub const SAFE_LINK_REL: &str = "noopener noreferrer";

pub const EXPERIENCES: &[ExperienceItem] = &[
    ExperienceItem {
        id: 1,
        title: "Desarrollador Backend",
        organization: "Proyecto Chequea (Sistema de Noticias)",
        location: "Remoto",
        period: "2025 - Actualidad",
        kind: ExperienceKind::Work,
        description: "Desarrollo de backend para sistema de publicación y gestión de noticias.",
        achievements: &[
            "Implementación de autenticación y control de permisos por roles",
            "Desarrollo completo de gestión de contenido",
            "Desarrollo de sockets para ver usuarios activos",
            "Implementación de SSE para notificaciones en tiempo real",
            "Integración de almacenamiento multimedia y endpoints administrativos",
            "Sistema de importación y optimización de imágenes",
        ],
        technologies: Some(&["NestJS", "PostgreSQL", "Prisma", "TypeScript"]),
    },
    ExperienceItem {
        id: 2,
        title: "Desarrollador Backend",
        organization: "Colaboraciones Externas",
        location: "Remoto",
        period: "2024 - 2025",
        kind: ExperienceKind::Freelance,
        description: "Creación de APIs REST en proyectos colaborativos con frontend developers.",
        achievements: &[
            "Diseño de lógica de negocio y modelado de datos eficiente",
            "Implementación de endpoints RESTful escalables y documentados",
            "Aplicación de metodologías ágiles en equipos multidisciplinarios",
            "Control de versiones con Git y documentación técnica detallada",
        ],
        technologies: Some(&["Node.js", "Express", "NestJS", "PostgreSQL", "MySQL"]),
    },
    ExperienceItem {
        id: 3,
        title: "Estudiante de Ingeniería Informática",
        organization: "Formación universitaria",
        location: "Presencial",
        period: "En curso",
        kind: ExperienceKind::Education,
        description: "Carrera de Ingeniería Informática con enfoque en desarrollo backend.",
        achievements: &[
            "Técnico Medio en Sistemas Informáticos",
            "Proyectos prácticos de APIs y bases de datos relacionales",
        ],
        technologies: None,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "API REST E-commerce",
        description: "Sistema completo de e-commerce con autenticación JWT, gestión de productos, carrito de compras y procesamiento de pagos.",
        technologies: &["Node.js", "Express", "PostgreSQL", "JWT", "Stripe API"],
        achievement: "Redujo el tiempo de respuesta en un 40% mediante optimización de consultas SQL y implementación de caché Redis.",
        image: "/placeholder.svg",
        repository_url: Some("https://github.com/jhoaking/ecommerce-api"),
        live_url: None,
        size: ProjectSize::Large,
    },
    Project {
        id: 2,
        title: "Sistema de Gestión de Tareas",
        description: "API para gestión de proyectos y tareas con roles de usuario, notificaciones en tiempo real y reportes.",
        technologies: &["Node.js", "Express", "MySQL", "Socket.io", "Jest"],
        achievement: "Implementó sistema de notificaciones en tiempo real que mejoró la colaboración del equipo en un 60%.",
        image: "/placeholder.svg",
        repository_url: Some("https://github.com/jhoaking/task-manager"),
        live_url: None,
        size: ProjectSize::Regular,
    },
    Project {
        id: 3,
        title: "Microservicio de Autenticación",
        description: "Servicio independiente para autenticación y autorización con OAuth2, 2FA y gestión de sesiones.",
        technologies: &["Node.js", "Express", "PostgreSQL", "OAuth2", "Redis"],
        achievement: "Centralizó la autenticación para 5 aplicaciones diferentes, reduciendo código duplicado en un 70%.",
        image: "/placeholder.svg",
        repository_url: Some("https://github.com/jhoaking/auth-microservice"),
        live_url: None,
        size: ProjectSize::Regular,
    },
    Project {
        id: 4,
        title: "API de Análisis de Datos",
        description: "Sistema para procesamiento y análisis de grandes volúmenes de datos con endpoints optimizados.",
        technologies: &["Node.js", "Express", "PostgreSQL", "TypeScript", "Bull Queue"],
        achievement: "Procesó más de 1 millón de registros diarios con un tiempo de respuesta promedio de 200ms.",
        image: "/placeholder.svg",
        repository_url: Some("https://github.com/jhoaking/data-analytics-api"),
        live_url: None,
        size: ProjectSize::Wide,
    },
];

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "Node.js", icon: "🟢" },
    Technology { name: "Express", icon: "⚡" },
    Technology { name: "PostgreSQL", icon: "🐘" },
    Technology { name: "MySQL", icon: "🗄️" },
    Technology { name: "TypeScript", icon: "🔷" },
    Technology { name: "JWT", icon: "🔐" },
    Technology { name: "Jest", icon: "🧪" },
    Technology { name: "Redis", icon: "🔴" },
    Technology { name: "Docker", icon: "🐳" },
    Technology { name: "Git", icon: "📝" },
    Technology { name: "REST APIs", icon: "🌐" },
    Technology { name: "Socket.io", icon: "⚡" },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Código Limpio",
        description: "Escribo código mantenible siguiendo las mejores prácticas de desarrollo",
    },
    Highlight {
        title: "APIs Robustas",
        description: "Especializado en crear APIs eficientes, seguras y escalables",
    },
    Highlight {
        title: "Trabajo en Equipo",
        description: "Colaboro efectivamente en equipos multidisciplinarios",
    },
    Highlight {
        title: "Aprendizaje Continuo",
        description: "Siempre actualizándome con las últimas tecnologías",
    },
];

pub const SKILLS: &[SkillSummary] = &[
    SkillSummary {
        title: "Backend Development",
        description: "Especializado en crear APIs REST robustas, seguras y escalables con Node.js y Express",
    },
    SkillSummary {
        title: "Base de Datos",
        description: "Experiencia en diseño y optimización de bases de datos relacionales con PostgreSQL y MySQL",
    },
    SkillSummary {
        title: "Testing & Quality",
        description: "Implementación de pruebas unitarias e integración con Jest para garantizar código de calidad",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: ChannelIcon::Mail,
        title: "Email",
        content: EMAIL,
        href: Some(MAILTO),
    },
    ContactChannel {
        icon: ChannelIcon::Github,
        title: "GitHub",
        content: "github.com/jhoaking",
        href: Some(GITHUB_URL),
    },
    ContactChannel {
        icon: ChannelIcon::Languages,
        title: "Idiomas",
        content: "Español (Nativo), Inglés (A2)",
        href: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());

        let mut ids = EXPERIENCES.iter().map(|e| e.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EXPERIENCES.len());
    }

    #[test]
    fn test_project_lookup() {
        assert_eq!(project_by_id(3).map(|p| p.title), Some("Microservicio de Autenticación"));
        assert!(project_by_id(42).is_none());
    }

    #[test]
    fn test_tech_preview_caps_and_counts_overflow() {
        let project = &PROJECTS[0];
        let (shown, hidden) = project.tech_preview(3);
        assert_eq!(shown, &["Node.js", "Express", "PostgreSQL"]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = project.tech_preview(10);
        assert_eq!(shown.len(), project.technologies.len());
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_marquee_is_list_twice() {
        let strip = marquee().map(|(_, t)| t.name).collect::<Vec<_>>();
        assert_eq!(strip.len(), TECHNOLOGIES.len() * 2);
        let (first, second) = strip.split_at(TECHNOLOGIES.len());
        assert_eq!(first, second);
        // keys stay unique even though names repeat
        let keys = marquee().map(|(i, _)| i).collect::<Vec<_>>();
        assert_eq!(keys, (0..TECHNOLOGIES.len() * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_channel_link_targets() {
        let mail = &CONTACT_CHANNELS[0];
        let github = &CONTACT_CHANNELS[1];
        let languages = &CONTACT_CHANNELS[2];
        assert!(!mail.opens_new_context());
        assert!(github.opens_new_context());
        assert!(!languages.opens_new_context());
    }

    #[test]
    fn test_timeline_alternates() {
        assert!(ExperienceItem::is_left(0));
        assert!(!ExperienceItem::is_left(1));
        assert!(ExperienceItem::is_left(2));
    }
}
