crate::define_id_enum_with_display! {
    /// Framework identifier
    FrameworkId {
        Spring => "spring" : "Spring" | "spring-boot" | "Spring Boot",
        Quarkus => "quarkus" : "Quarkus",
        Micronaut => "micronaut" : "Micronaut",
        OpenLiberty => "openliberty" : "OpenLiberty" | "liberty",
        Vertx => "vertx" : "Vertx" | "vert.x",
        Express => "express" : "Express",
        React => "react" : "React",
        NextJs => "nextjs" : "Next.js" | "next",
        Angular => "angular" : "Angular",
        Vue => "vue" : "Vue",
        Django => "django" : "Django",
        Flask => "flask" : "Flask",
        FastApi => "fastapi" : "FastAPI",
        Gin => "gin" : "Gin",
        Echo => "echo" : "Echo",
        FastHttp => "fasthttp" : "FastHttp",
        Beego => "beego" : "Beego",
        GoFiber => "gofiber" : "GoFiber" | "fiber",
        Mux => "mux" : "Mux" | "gorilla",
        AspNetCore => "aspnetcore" : "ASP.NET Core" | "aspnet",
        Rails => "rails" : "Rails" | "ruby on rails",
        Sinatra => "sinatra" : "Sinatra",
        Laravel => "laravel" : "Laravel",
        Symfony => "symfony" : "Symfony",
        ActixWeb => "actix-web" : "Actix Web" | "actix",
        Axum => "axum" : "Axum",
        Phoenix => "phoenix" : "Phoenix",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_lookup() {
        assert_eq!(FrameworkId::from_name("spring boot"), Some(FrameworkId::Spring));
        assert_eq!(FrameworkId::from_name("fiber"), Some(FrameworkId::GoFiber));
        assert_eq!(FrameworkId::Gin.name(), "Gin");
    }
}
